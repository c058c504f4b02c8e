use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Why a warning was raised, with the figures that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskWarningKind {
    DrawdownExceeded {
        /// Max drawdown as a fraction of initial capital.
        drawdown_pct: Decimal,
        alert: Decimal,
    },
    DailyLossExceeded {
        date: String,
        /// Positive loss amount for the day.
        loss: Decimal,
        limit: Decimal,
    },
    ConsecutiveLosses {
        streak: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskWarning {
    #[serde(flatten)]
    pub kind: RiskWarningKind,
    pub message: String,
}

impl RiskWarning {
    pub fn new(kind: RiskWarningKind) -> Self {
        let message = match &kind {
            RiskWarningKind::DrawdownExceeded {
                drawdown_pct,
                alert,
            } => format!(
                "Max drawdown ({}%) exceeds alert line ({}%)",
                drawdown_pct.saturating_mul(Decimal::ONE_HUNDRED).round_dp(2),
                alert.saturating_mul(Decimal::ONE_HUNDRED).round_dp(2)
            ),
            RiskWarningKind::DailyLossExceeded { date, loss, limit } => format!(
                "Loss on {date} ({}) exceeds daily loss limit ({})",
                loss.round_dp(2),
                limit.round_dp(2)
            ),
            RiskWarningKind::ConsecutiveLosses { streak } => format!(
                "{streak} consecutive losing trades detected, review the system or pause trading"
            ),
        };
        Self { kind, message }
    }
}

impl fmt::Display for RiskWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
