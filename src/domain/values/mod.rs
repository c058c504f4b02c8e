pub mod journal_kind;
pub mod position_sizing;
pub mod risk_config;
pub mod risk_warning;
pub mod trade_direction;
pub mod trade_outcome;
pub mod trade_stats;
