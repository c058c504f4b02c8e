//! Shared test helpers.
#![allow(dead_code)]

use rust_decimal::Decimal;
use std::sync::Arc;
use tradejournal::domain::entities::trade::{NumericInput, TradeInput};
use tradejournal::domain::values::risk_config::RiskConfig;
use tradejournal::domain::values::trade_direction::TradeDirection;
use tradejournal::domain::values::trade_outcome::TradeOutcome;
use tradejournal::infrastructure::config::memory::MemoryConfigStore;
use tradejournal::TradeJournal;

pub fn setup() -> TradeJournal {
    setup_with(RiskConfig::default())
}

pub fn setup_with(config: RiskConfig) -> TradeJournal {
    TradeJournal::with_config_store(":memory:", Arc::new(MemoryConfigStore::new(config))).unwrap()
}

pub fn make_input(date: &str, time: &str, symbol: &str, pnl: Decimal) -> TradeInput {
    let outcome = if pnl > Decimal::ZERO {
        TradeOutcome::Profit
    } else if pnl < Decimal::ZERO {
        TradeOutcome::Loss
    } else {
        TradeOutcome::Breakeven
    };
    TradeInput {
        date: date.to_string(),
        time: time.to_string(),
        symbol: symbol.to_string(),
        direction: TradeDirection::Buy,
        price: Some(NumericInput::from(Decimal::new(100, 0))),
        quantity: Some(NumericInput::from(Decimal::ONE)),
        stop_price: None,
        target_price: None,
        outcome,
        pnl: Some(NumericInput::from(pnl)),
        note: String::new(),
    }
}

/// Add one trade per day starting 2024-01-01, in the given pnl order.
pub fn add_series(tj: &TradeJournal, pnls: &[Decimal]) {
    for (i, pnl) in pnls.iter().enumerate() {
        tj.trade_add(make_input(&format!("2024-01-{:02}", i + 1), "09:30", "IF", *pnl))
            .unwrap();
    }
}
