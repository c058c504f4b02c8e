use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeOutcome {
    #[serde(alias = "盈利", alias = "win")]
    Profit,
    #[serde(alias = "亏损")]
    Loss,
    #[serde(alias = "持平", alias = "scratch")]
    Breakeven,
    #[default]
    #[serde(alias = "未平仓")]
    Open,
}

impl fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeOutcome::Profit => write!(f, "profit"),
            TradeOutcome::Loss => write!(f, "loss"),
            TradeOutcome::Breakeven => write!(f, "breakeven"),
            TradeOutcome::Open => write!(f, "open"),
        }
    }
}

impl FromStr for TradeOutcome {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "profit" | "win" | "盈利" => Ok(TradeOutcome::Profit),
            "loss" | "亏损" => Ok(TradeOutcome::Loss),
            "breakeven" | "scratch" | "持平" => Ok(TradeOutcome::Breakeven),
            "open" | "未平仓" => Ok(TradeOutcome::Open),
            _ => Err(format!("Unknown trade outcome: {s}")),
        }
    }
}
