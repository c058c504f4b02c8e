use crate::domain::entities::trade::TradeRecord;
use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TradeOrder {
    /// Ascending (date, time). With a limit, the newest trades are kept.
    #[default]
    Chronological,
    /// The order trades were stored in. Edits keep their original slot.
    Insertion,
}

#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub limit: Option<usize>,
    /// Inclusive lower bound on the trade date ("YYYY-MM-DD").
    pub since: Option<String>,
    pub symbol: Option<String>,
    pub order: TradeOrder,
}

/// Trade storage. `list_trades` orders according to `TradeFilter::order`.
pub trait TradeRepository: Send + Sync {
    fn add_trade(&self, trade: &TradeRecord) -> Result<(), DomainError>;
    /// Insert a batch atomically: either every trade is stored or none is.
    fn add_trades(&self, trades: &[TradeRecord]) -> Result<(), DomainError>;
    /// Replace the stored trade with the same id.
    fn update_trade(&self, trade: &TradeRecord) -> Result<(), DomainError>;
    fn delete_trade(&self, id: &str) -> Result<(), DomainError>;
    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<TradeRecord>, DomainError>;
    fn get_trade(&self, id: &str) -> Result<Option<TradeRecord>, DomainError>;
}
