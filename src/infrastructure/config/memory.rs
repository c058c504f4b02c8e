use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::values::risk_config::RiskConfig;
use std::sync::RwLock;

/// Config held in memory only. Used when no settings file is wanted.
#[derive(Default)]
pub struct MemoryConfigStore {
    config: RwLock<RiskConfig>,
}

impl MemoryConfigStore {
    pub fn new(config: RiskConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<RiskConfig, DomainError> {
        self.config
            .read()
            .map(|c| c.clone())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    fn save(&self, config: &RiskConfig) -> Result<(), DomainError> {
        config.validate()?;
        let mut guard = self
            .config
            .write()
            .map_err(|e| DomainError::Config(e.to_string()))?;
        *guard = config.clone();
        Ok(())
    }
}
