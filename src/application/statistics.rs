//! Trade statistics and risk checks.
//!
//! `compute_statistics` and `check_risk_warnings` are pure functions over a
//! trade slice: no caching, no shared state, safe to call from any thread on
//! an immutable snapshot. `StatisticsUseCase` loads the snapshot from the
//! stores and hands it to them.

use crate::domain::entities::trade::TradeRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::ports::trade_repository::{TradeFilter, TradeOrder, TradeRepository};
use crate::domain::values::risk_config::RiskConfig;
use crate::domain::values::risk_warning::{RiskWarning, RiskWarningKind};
use crate::domain::values::trade_stats::StatsResult;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Losing streak length that triggers a warning.
// TODO: move into RiskConfig once the settings file grows a field for it.
pub const CONSECUTIVE_LOSS_THRESHOLD: usize = 5;

/// Division that clamps to the representable range instead of panicking.
fn saturating_div(numerator: Decimal, divisor: Decimal) -> Decimal {
    numerator.checked_div(divisor).unwrap_or_else(|| {
        if numerator.is_sign_negative() != divisor.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}

pub fn compute_statistics(trades: &[TradeRecord]) -> StatsResult {
    if trades.is_empty() {
        return StatsResult::default();
    }

    let total_trades = trades.len();
    let mut winning_trades = 0usize;
    let mut losing_trades = 0usize;
    let mut gross_profit = Decimal::ZERO;
    let mut gross_loss = Decimal::ZERO;

    for trade in trades {
        if trade.pnl > Decimal::ZERO {
            winning_trades += 1;
            gross_profit = gross_profit.saturating_add(trade.pnl);
        } else if trade.pnl < Decimal::ZERO {
            losing_trades += 1;
            gross_loss = gross_loss.saturating_add(trade.pnl.abs());
        }
    }

    let win_rate = Decimal::from(winning_trades) / Decimal::from(total_trades);
    let avg_profit = if winning_trades > 0 {
        gross_profit / Decimal::from(winning_trades)
    } else {
        Decimal::ZERO
    };
    let avg_loss = if losing_trades > 0 {
        gross_loss / Decimal::from(losing_trades)
    } else {
        Decimal::ZERO
    };
    let profit_factor = if avg_loss > Decimal::ZERO {
        saturating_div(avg_profit, avg_loss)
    } else {
        Decimal::ZERO
    };
    let expectancy = win_rate * avg_profit - (Decimal::ONE - win_rate) * avg_loss;

    StatsResult {
        total_trades,
        winning_trades,
        losing_trades,
        win_rate,
        avg_profit,
        avg_loss,
        profit_factor,
        expectancy,
        max_drawdown: max_drawdown(trades),
    }
}

/// Largest peak-to-trough fall of the cumulative pnl curve.
///
/// Trades are ordered by date (stable, so same-day trades keep their input
/// order). The curve and its running peak both start at zero.
pub fn max_drawdown(trades: &[TradeRecord]) -> Decimal {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by(|a, b| a.date.cmp(&b.date));

    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut worst = Decimal::ZERO;
    for trade in sorted {
        cumulative = cumulative.saturating_add(trade.pnl);
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = peak.saturating_sub(cumulative);
        if drawdown > worst {
            worst = drawdown;
        }
    }
    worst
}

/// Longest run of losing trades in (date, time) order.
pub fn max_consecutive_losses(trades: &[TradeRecord]) -> usize {
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));

    let mut current = 0usize;
    let mut longest = 0usize;
    for trade in sorted {
        if trade.pnl < Decimal::ZERO {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Warnings in a fixed order: drawdown, daily losses by ascending date,
/// then the losing streak.
pub fn check_risk_warnings(trades: &[TradeRecord], config: &RiskConfig) -> Vec<RiskWarning> {
    let mut warnings = Vec::new();
    if trades.is_empty() {
        return warnings;
    }

    // A zero capital gives no meaningful percentage; skip rather than divide.
    if config.initial_capital > Decimal::ZERO {
        let drawdown_pct = saturating_div(max_drawdown(trades), config.initial_capital);
        if drawdown_pct > config.max_drawdown_alert {
            warnings.push(RiskWarning::new(RiskWarningKind::DrawdownExceeded {
                drawdown_pct,
                alert: config.max_drawdown_alert,
            }));
        }
    }

    let mut daily_pnl: BTreeMap<&str, Decimal> = BTreeMap::new();
    for trade in trades {
        let day = daily_pnl.entry(trade.date.as_str()).or_insert(Decimal::ZERO);
        *day = day.saturating_add(trade.pnl);
    }
    let limit = config.daily_loss_amount();
    for (date, pnl) in daily_pnl {
        if pnl < -limit {
            warnings.push(RiskWarning::new(RiskWarningKind::DailyLossExceeded {
                date: date.to_string(),
                loss: -pnl,
                limit,
            }));
        }
    }

    let streak = max_consecutive_losses(trades);
    if streak >= CONSECUTIVE_LOSS_THRESHOLD {
        warnings.push(RiskWarning::new(RiskWarningKind::ConsecutiveLosses { streak }));
    }

    warnings
}

/// Account-level figures shown next to the statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountSummary {
    pub user_name: String,
    pub initial_capital: Decimal,
    pub total_pnl: Decimal,
    pub current_capital: Decimal,
    /// total_pnl / initial_capital.
    pub total_return: Decimal,
    /// max_drawdown / initial_capital.
    pub max_drawdown_pct: Decimal,
    pub open_trades: usize,
}

pub fn account_summary(trades: &[TradeRecord], config: &RiskConfig) -> AccountSummary {
    let total_pnl = trades
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.pnl));
    let ratio = |v: Decimal| {
        if config.initial_capital > Decimal::ZERO {
            saturating_div(v, config.initial_capital)
        } else {
            Decimal::ZERO
        }
    };
    AccountSummary {
        user_name: config.user_name.clone(),
        initial_capital: config.initial_capital,
        total_pnl,
        current_capital: config.initial_capital.saturating_add(total_pnl),
        total_return: ratio(total_pnl),
        max_drawdown_pct: ratio(max_drawdown(trades)),
        open_trades: trades.iter().filter(|t| t.is_open()).count(),
    }
}

pub struct StatisticsUseCase {
    trades: Arc<dyn TradeRepository>,
    config: Arc<dyn ConfigStore>,
}

impl StatisticsUseCase {
    pub fn new(trades: Arc<dyn TradeRepository>, config: Arc<dyn ConfigStore>) -> Self {
        Self { trades, config }
    }

    /// Every trade in insertion order, which the engine's stable sorts rely
    /// on for same-day ties.
    fn snapshot(&self) -> Result<Vec<TradeRecord>, DomainError> {
        self.trades.list_trades(&TradeFilter {
            order: TradeOrder::Insertion,
            ..TradeFilter::default()
        })
    }

    pub fn stats(&self) -> Result<StatsResult, DomainError> {
        let trades = self.snapshot()?;
        let stats = compute_statistics(&trades);
        debug!(
            total = stats.total_trades,
            win_rate = %stats.win_rate,
            max_drawdown = %stats.max_drawdown,
            "computed trade statistics"
        );
        Ok(stats)
    }

    pub fn warnings(&self) -> Result<Vec<RiskWarning>, DomainError> {
        let trades = self.snapshot()?;
        let config = self.config.load()?;
        let warnings = check_risk_warnings(&trades, &config);
        for w in &warnings {
            warn!("{}", w.message);
        }
        Ok(warnings)
    }

    pub fn summary(&self) -> Result<AccountSummary, DomainError> {
        let trades = self.snapshot()?;
        let config = self.config.load()?;
        Ok(account_summary(&trades, &config))
    }
}
