//! Fixed-fractional position sizing.
//!
//! Risk a fixed fraction of capital per trade and size the position so that
//! hitting the stop loses exactly that amount:
//! `size = capital * risk_fraction / |entry - stop|`.

use crate::domain::error::DomainError;
use crate::domain::values::trade_direction::TradeDirection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionSizing {
    /// Currency amount lost if the stop is hit.
    pub risk_amount: Decimal,
    /// Price distance between entry and stop, always positive.
    pub stop_distance: Decimal,
    /// Suggested quantity.
    pub position_size: Decimal,
}

impl PositionSizing {
    pub fn calculate(
        capital: Decimal,
        risk_fraction: Decimal,
        direction: TradeDirection,
        entry_price: Decimal,
        stop_price: Decimal,
    ) -> Result<Self, DomainError> {
        if capital <= Decimal::ZERO {
            return Err(DomainError::InvalidInput("capital must be greater than 0".into()));
        }
        if risk_fraction <= Decimal::ZERO || risk_fraction > Decimal::ONE {
            return Err(DomainError::InvalidInput(format!(
                "risk fraction must be in (0, 1], got {risk_fraction}"
            )));
        }
        if entry_price <= Decimal::ZERO || stop_price <= Decimal::ZERO {
            return Err(DomainError::InvalidInput(
                "entry and stop prices must be greater than 0".into(),
            ));
        }

        let stop_distance = match direction {
            TradeDirection::Buy => entry_price - stop_price,
            TradeDirection::Sell => stop_price - entry_price,
        };
        if stop_distance <= Decimal::ZERO {
            return Err(DomainError::InvalidInput(
                "stop must be below entry for a buy and above entry for a sell".into(),
            ));
        }

        let risk_amount = capital * risk_fraction;
        let position_size = risk_amount.checked_div(stop_distance).ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "stop distance {stop_distance} is too small for a risk of {risk_amount}"
            ))
        })?;
        Ok(Self {
            risk_amount,
            stop_distance,
            position_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_sizing() {
        let s = PositionSizing::calculate(
            dec!(100000),
            dec!(0.02),
            TradeDirection::Buy,
            dec!(50),
            dec!(48),
        )
        .unwrap();
        assert_eq!(s.risk_amount, dec!(2000));
        assert_eq!(s.stop_distance, dec!(2));
        assert_eq!(s.position_size, dec!(1000));
    }

    #[test]
    fn test_sell_sizing() {
        let s = PositionSizing::calculate(
            dec!(10000),
            dec!(0.01),
            TradeDirection::Sell,
            dec!(20),
            dec!(20.5),
        )
        .unwrap();
        assert_eq!(s.risk_amount, dec!(100));
        assert_eq!(s.stop_distance, dec!(0.5));
        assert_eq!(s.position_size, dec!(200));
    }

    #[test]
    fn test_stop_on_wrong_side() {
        assert!(PositionSizing::calculate(
            dec!(10000),
            dec!(0.02),
            TradeDirection::Buy,
            dec!(10),
            dec!(11),
        )
        .is_err());
        assert!(PositionSizing::calculate(
            dec!(10000),
            dec!(0.02),
            TradeDirection::Sell,
            dec!(10),
            dec!(10),
        )
        .is_err());
    }

    #[test]
    fn test_oversized_position_is_rejected() {
        let err = PositionSizing::calculate(
            Decimal::MAX,
            Decimal::ONE,
            TradeDirection::Buy,
            Decimal::ONE,
            Decimal::ONE - Decimal::new(1, 28),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(PositionSizing::calculate(
            Decimal::ZERO,
            dec!(0.02),
            TradeDirection::Buy,
            dec!(10),
            dec!(9),
        )
        .is_err());
        assert!(PositionSizing::calculate(
            dec!(1000),
            dec!(1.2),
            TradeDirection::Buy,
            dec!(10),
            dec!(9),
        )
        .is_err());
        assert!(PositionSizing::calculate(
            dec!(1000),
            dec!(0.02),
            TradeDirection::Buy,
            dec!(-1),
            dec!(-2),
        )
        .is_err());
    }
}
