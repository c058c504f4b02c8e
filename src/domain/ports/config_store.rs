use crate::domain::error::DomainError;
use crate::domain::values::risk_config::RiskConfig;

/// Where the risk configuration lives.
pub trait ConfigStore: Send + Sync {
    /// Current config, or defaults when nothing has been saved yet.
    fn load(&self) -> Result<RiskConfig, DomainError>;
    /// Validate then persist.
    fn save(&self, config: &RiskConfig) -> Result<(), DomainError>;
}
