use crate::domain::entities::trade::TradeRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::*;
use crate::domain::values::trade_direction::TradeDirection;
use crate::domain::values::trade_outcome::TradeOutcome;
use rusqlite::types::Type;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Mutex;

const COLUMNS: &str = "id, date, time, symbol, direction, price, quantity, stop_price, target_price, outcome, pnl, note";

const INSERT: &str = "INSERT INTO trades (id, date, time, symbol, direction, price, quantity, stop_price, target_price, outcome, pnl, note, seq)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, (SELECT COALESCE(MAX(seq), 0) + 1 FROM trades))";

// seq is left alone so an edited trade keeps its insertion slot.
const UPDATE: &str = "UPDATE trades SET date = ?2, time = ?3, symbol = ?4, direction = ?5, price = ?6, quantity = ?7,
     stop_price = ?8, target_price = ?9, outcome = ?10, pnl = ?11, note = ?12 WHERE id = ?1";

pub struct SqliteTradeRepo {
    conn: Mutex<Connection>,
}

fn conversion_error(idx: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, msg.into())
}

fn decimal_at(row: &rusqlite::Row, idx: usize) -> Result<Decimal, rusqlite::Error> {
    let raw: String = row.get(idx)?;
    Decimal::from_str(&raw).map_err(|e| conversion_error(idx, format!("{raw:?}: {e}")))
}

fn optional_decimal_at(row: &rusqlite::Row, idx: usize) -> Result<Option<Decimal>, rusqlite::Error> {
    let raw: Option<String> = row.get(idx)?;
    raw.map(|s| Decimal::from_str(&s).map_err(|e| conversion_error(idx, format!("{s:?}: {e}"))))
        .transpose()
}

impl SqliteTradeRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_trade(row: &rusqlite::Row) -> Result<TradeRecord, rusqlite::Error> {
        let dir_str: String = row.get(4)?;
        let outcome_str: String = row.get(9)?;

        Ok(TradeRecord {
            id: row.get(0)?,
            date: row.get(1)?,
            time: row.get(2)?,
            symbol: row.get(3)?,
            direction: dir_str
                .parse::<TradeDirection>()
                .map_err(|e: String| conversion_error(4, e))?,
            price: decimal_at(row, 5)?,
            quantity: decimal_at(row, 6)?,
            stop_price: optional_decimal_at(row, 7)?,
            target_price: optional_decimal_at(row, 8)?,
            outcome: outcome_str
                .parse::<TradeOutcome>()
                .map_err(|e: String| conversion_error(9, e))?,
            pnl: decimal_at(row, 10)?,
            note: row.get(11)?,
        })
    }

    fn write(conn: &Connection, sql: &str, trade: &TradeRecord) -> Result<usize, rusqlite::Error> {
        conn.execute(
            sql,
            params![
                trade.id,
                trade.date,
                trade.time,
                trade.symbol,
                trade.direction.to_string(),
                trade.price.to_string(),
                trade.quantity.to_string(),
                trade.stop_price.map(|d| d.to_string()),
                trade.target_price.map(|d| d.to_string()),
                trade.outcome.to_string(),
                trade.pnl.to_string(),
                trade.note,
            ],
        )
    }
}

impl TradeRepository for SqliteTradeRepo {
    fn add_trade(&self, trade: &TradeRecord) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Self::write(&conn, INSERT, trade)
            .map_err(|e| DomainError::Database(format!("Failed to add trade: {e}")))?;
        Ok(())
    }

    fn add_trades(&self, trades: &[TradeRecord]) -> Result<(), DomainError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        for trade in trades {
            Self::write(&tx, INSERT, trade)
                .map_err(|e| DomainError::Database(format!("Failed to add trade {}: {e}", trade.id)))?;
        }
        tx.commit()
            .map_err(|e| DomainError::Database(format!("Failed to commit trades: {e}")))
    }

    fn update_trade(&self, trade: &TradeRecord) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = Self::write(&conn, UPDATE, trade)
            .map_err(|e| DomainError::Database(format!("Failed to update trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {}", trade.id)));
        }
        Ok(())
    }

    fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM trades WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        Ok(())
    }

    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<TradeRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut sql = format!("SELECT {COLUMNS} FROM trades WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(since) = &filter.since {
            sql.push_str(&format!(" AND date >= ?{}", param_values.len() + 1));
            param_values.push(Box::new(since.clone()));
        }
        if let Some(symbol) = &filter.symbol {
            sql.push_str(&format!(" AND symbol = ?{}", param_values.len() + 1));
            param_values.push(Box::new(symbol.clone()));
        }
        // A limited chronological listing keeps the newest trades: take them
        // newest first, then put them back in ascending order.
        let newest_first = filter.order == TradeOrder::Chronological && filter.limit.is_some();
        sql.push_str(match (filter.order, newest_first) {
            (TradeOrder::Insertion, _) => " ORDER BY seq ASC",
            (TradeOrder::Chronological, false) => " ORDER BY date ASC, time ASC, seq ASC",
            (TradeOrder::Chronological, true) => " ORDER BY date DESC, time DESC, seq DESC",
        });
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut trades = stmt
            .query_map(params_refs.as_slice(), Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(format!("Corrupt trade row: {e}")))?;
        if newest_first {
            trades.reverse();
        }
        Ok(trades)
    }

    fn get_trade(&self, id: &str) -> Result<Option<TradeRecord>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM trades WHERE id = ?1"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Database(format!("Corrupt trade row: {e}")))
    }
}
