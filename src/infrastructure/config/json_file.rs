use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::values::risk_config::RiskConfig;
use std::path::PathBuf;
use tracing::{debug, info};

/// Risk config kept as a pretty-printed JSON file.
///
/// A missing file reads as `RiskConfig::default()`. Missing keys in an
/// existing file fall back to their defaults.
pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<RiskConfig, DomainError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "config file missing, using defaults");
            return Ok(RiskConfig::default());
        }
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Config(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            DomainError::Config(format!("Invalid config in {}: {e}", self.path.display()))
        })
    }

    fn save(&self, config: &RiskConfig) -> Result<(), DomainError> {
        config.validate()?;
        let text = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, text).map_err(|e| {
            DomainError::Config(format!("Failed to write {}: {e}", self.path.display()))
        })?;
        info!(path = %self.path.display(), "config saved");
        Ok(())
    }
}
