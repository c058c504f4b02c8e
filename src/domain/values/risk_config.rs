//! Risk settings for the journal.
//!
//! Fractions are stored as plain ratios (0.05 = 5%). The statistics engine
//! trusts whatever it is given; `validate` is the gate the config stores use
//! before persisting an edited config.

use crate::domain::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Starting account balance in currency units.
    pub initial_capital: Decimal,
    /// Fraction of capital risked on a single trade.
    pub risk_per_trade: Decimal,
    /// Largest fraction of capital allowed in one position.
    pub max_position_size: Decimal,
    /// Drawdown (as a fraction of initial capital) that triggers a warning.
    pub max_drawdown_alert: Decimal,
    /// Single-day loss (as a fraction of initial capital) that triggers a warning.
    pub daily_loss_limit: Decimal,
    /// Yearly return target.
    pub profit_target: Decimal,
    pub user_name: String,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            initial_capital: Decimal::new(100_000, 0),
            risk_per_trade: Decimal::new(2, 2),    // 2%
            max_position_size: Decimal::new(3, 1), // 30%
            max_drawdown_alert: Decimal::new(1, 1), // 10%
            daily_loss_limit: Decimal::new(5, 2),  // 5%
            profit_target: Decimal::new(5, 1),     // 50%
            user_name: "Trader".to_string(),
        }
    }
}

impl RiskConfig {
    /// Check the ranges the settings editor enforces.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.initial_capital <= Decimal::ZERO {
            return Err(DomainError::InvalidInput(
                "initial_capital must be greater than 0".into(),
            ));
        }
        let fractions = [
            ("risk_per_trade", self.risk_per_trade),
            ("max_position_size", self.max_position_size),
            ("max_drawdown_alert", self.max_drawdown_alert),
            ("daily_loss_limit", self.daily_loss_limit),
        ];
        for (name, value) in fractions {
            if value <= Decimal::ZERO || value > Decimal::ONE {
                return Err(DomainError::InvalidInput(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        if self.profit_target <= Decimal::ZERO {
            return Err(DomainError::InvalidInput(
                "profit_target must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Absolute currency amount a single day may lose before warning.
    pub fn daily_loss_amount(&self) -> Decimal {
        self.daily_loss_limit.saturating_mul(self.initial_capital)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let c = RiskConfig::default();
        assert_eq!(c.initial_capital, dec!(100000));
        assert_eq!(c.risk_per_trade, dec!(0.02));
        assert_eq!(c.max_position_size, dec!(0.3));
        assert_eq!(c.max_drawdown_alert, dec!(0.1));
        assert_eq!(c.daily_loss_limit, dec!(0.05));
        assert_eq!(c.profit_target, dec!(0.5));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let c: RiskConfig =
            serde_json::from_str(r#"{"initial_capital": 50000, "user_name": "tony"}"#).unwrap();
        assert_eq!(c.initial_capital, dec!(50000));
        assert_eq!(c.daily_loss_limit, dec!(0.05));
        assert_eq!(c.user_name, "tony");
    }

    #[test]
    fn test_daily_loss_amount() {
        assert_eq!(RiskConfig::default().daily_loss_amount(), dec!(5000));
    }

    #[test]
    fn test_rejects_zero_capital() {
        let c = RiskConfig {
            initial_capital: Decimal::ZERO,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_rejects_fraction_above_one() {
        let c = RiskConfig {
            daily_loss_limit: dec!(1.5),
            ..Default::default()
        };
        let err = c.validate().unwrap_err().to_string();
        assert!(err.contains("daily_loss_limit"));
    }

    #[test]
    fn test_accepts_fraction_of_exactly_one() {
        let c = RiskConfig {
            max_position_size: Decimal::ONE,
            ..Default::default()
        };
        assert!(c.validate().is_ok());
    }
}
