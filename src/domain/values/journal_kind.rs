use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a journal entry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JournalKind {
    #[serde(alias = "交易复盘")]
    Review,
    #[serde(alias = "市场分析")]
    MarketAnalysis,
    #[serde(alias = "心得体会")]
    Insight,
    #[serde(alias = "策略研究")]
    StrategyResearch,
    #[default]
    #[serde(alias = "其他")]
    Other,
}

impl fmt::Display for JournalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JournalKind::Review => write!(f, "review"),
            JournalKind::MarketAnalysis => write!(f, "market_analysis"),
            JournalKind::Insight => write!(f, "insight"),
            JournalKind::StrategyResearch => write!(f, "strategy_research"),
            JournalKind::Other => write!(f, "other"),
        }
    }
}

impl FromStr for JournalKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "review" | "交易复盘" => Ok(JournalKind::Review),
            "market_analysis" | "market" | "市场分析" => Ok(JournalKind::MarketAnalysis),
            "insight" | "心得体会" => Ok(JournalKind::Insight),
            "strategy_research" | "strategy" | "策略研究" => Ok(JournalKind::StrategyResearch),
            "other" | "其他" => Ok(JournalKind::Other),
            _ => Err(format!("Unknown journal kind: {s}")),
        }
    }
}
