use crate::domain::entities::trade::{TradeInput, TradeRecord};
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeOrder, TradeRepository};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

pub struct TradeUseCase {
    repo: Arc<dyn TradeRepository>,
}

impl TradeUseCase {
    pub fn new(repo: Arc<dyn TradeRepository>) -> Self {
        Self { repo }
    }

    pub fn add(&self, input: TradeInput) -> Result<TradeRecord, DomainError> {
        let trade = input.into_record(uuid::Uuid::new_v4().to_string())?;
        self.repo.add_trade(&trade)?;
        info!(id = %trade.id, symbol = %trade.symbol, date = %trade.date, "trade added");
        Ok(trade)
    }

    pub fn get(&self, id: &str) -> Result<TradeRecord, DomainError> {
        self.repo
            .get_trade(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))
    }

    /// Replace an existing trade. The id and storage slot are kept.
    pub fn update(&self, id: &str, input: TradeInput) -> Result<TradeRecord, DomainError> {
        self.get(id)?;
        let trade = input.into_record(id.to_string())?;
        self.repo.update_trade(&trade)?;
        info!(id, symbol = %trade.symbol, date = %trade.date, "trade updated");
        Ok(trade)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete_trade(id)?;
        info!(id, "trade deleted");
        Ok(())
    }

    pub fn list(
        &self,
        limit: Option<usize>,
        since: Option<String>,
        symbol: Option<String>,
    ) -> Result<Vec<TradeRecord>, DomainError> {
        self.repo.list_trades(&TradeFilter {
            limit,
            since,
            symbol,
            ..TradeFilter::default()
        })
    }

    /// Every trade in the order it was stored, as the statistics engine expects.
    pub fn snapshot(&self) -> Result<Vec<TradeRecord>, DomainError> {
        self.repo.list_trades(&TradeFilter {
            order: TradeOrder::Insertion,
            ..TradeFilter::default()
        })
    }

    /// Import a JSON array of trades. Every record is validated before any is
    /// stored, so one bad record rejects the whole file.
    pub fn import_json(&self, json: &str) -> Result<Vec<TradeRecord>, DomainError> {
        let inputs: Vec<TradeInput> = serde_json::from_str(json)?;
        let trades = inputs
            .into_iter()
            .enumerate()
            .map(|(i, input)| {
                input
                    .into_record(uuid::Uuid::new_v4().to_string())
                    .map_err(|e| DomainError::InvalidInput(format!("record {}: {e}", i + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.repo.add_trades(&trades)?;
        info!(count = trades.len(), "trades imported");
        Ok(trades)
    }

    /// Write every trade as CSV in chronological order. Returns the row count.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, DomainError> {
        let trades = self.repo.list_trades(&TradeFilter::default())?;
        let mut wtr = csv::Writer::from_writer(writer);
        let csv_err = |e: csv::Error| DomainError::Io(std::io::Error::other(e.to_string()));

        wtr.write_record([
            "date",
            "time",
            "symbol",
            "direction",
            "price",
            "quantity",
            "stop_price",
            "target_price",
            "outcome",
            "pnl",
            "note",
        ])
        .map_err(csv_err)?;
        for t in &trades {
            wtr.write_record([
                t.date.clone(),
                t.time.clone(),
                t.symbol.clone(),
                t.direction.to_string(),
                t.price.to_string(),
                t.quantity.to_string(),
                t.stop_price.map(|d| d.to_string()).unwrap_or_default(),
                t.target_price.map(|d| d.to_string()).unwrap_or_default(),
                t.outcome.to_string(),
                t.pnl.to_string(),
                t.note.clone(),
            ])
            .map_err(csv_err)?;
        }
        wtr.flush()?;
        info!(rows = trades.len(), "trades exported to csv");
        Ok(trades.len())
    }
}
