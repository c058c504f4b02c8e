use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate performance of a set of trades.
///
/// `Default` is the all-zero result returned for an empty trade list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatsResult {
    pub total_trades: usize,
    /// Trades with pnl > 0.
    pub winning_trades: usize,
    /// Trades with pnl < 0. Breakeven and open trades are in neither bucket.
    pub losing_trades: usize,
    /// winning_trades / total_trades, in [0, 1].
    pub win_rate: Decimal,
    pub avg_profit: Decimal,
    /// Mean loss magnitude, never negative.
    pub avg_loss: Decimal,
    /// avg_profit / avg_loss, or 0 when there are no losses.
    /// This is the average win/loss ratio, not gross profit over gross loss.
    pub profit_factor: Decimal,
    pub expectancy: Decimal,
    /// Largest peak-to-trough fall of the cumulative pnl curve, in currency units.
    pub max_drawdown: Decimal,
}
