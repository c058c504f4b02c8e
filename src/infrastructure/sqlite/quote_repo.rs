use crate::domain::entities::heart_quote::HeartQuote;
use crate::domain::error::DomainError;
use crate::domain::ports::quote_repository::QuoteRepository;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::sync::Mutex;

const COLUMNS: &str = "id, category, quote, created_at";

pub struct SqliteQuoteRepo {
    conn: Mutex<Connection>,
}

impl SqliteQuoteRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_quote(row: &rusqlite::Row) -> Result<HeartQuote, rusqlite::Error> {
        let created_str: String = row.get(3)?;
        Ok(HeartQuote {
            id: row.get(0)?,
            category: row.get(1)?,
            quote: row.get(2)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_default(),
        })
    }
}

impl QuoteRepository for SqliteQuoteRepo {
    fn add_quote(&self, quote: &HeartQuote) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO heart_quotes (id, category, quote, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                quote.id,
                quote.category,
                quote.quote,
                quote.created_at.to_rfc3339()
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add quote: {e}")))?;
        Ok(())
    }

    fn update_quote(&self, quote: &HeartQuote) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute(
                "UPDATE heart_quotes SET category = ?2, quote = ?3 WHERE id = ?1",
                params![quote.id, quote.category, quote.quote],
            )
            .map_err(|e| DomainError::Database(format!("Failed to update quote: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Quote not found: {}", quote.id)));
        }
        Ok(())
    }

    fn delete_quote(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM heart_quotes WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete quote: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Quote not found: {id}")));
        }
        Ok(())
    }

    fn list_quotes(&self) -> Result<Vec<HeartQuote>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM heart_quotes ORDER BY rowid ASC"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let quotes = stmt
            .query_map([], Self::row_to_quote)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DomainError::Database(format!("Corrupt quote row: {e}")))?;
        Ok(quotes)
    }

    fn get_quote(&self, id: &str) -> Result<Option<HeartQuote>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM heart_quotes WHERE id = ?1"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_quote)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        rows.next()
            .transpose()
            .map_err(|e| DomainError::Database(format!("Corrupt quote row: {e}")))
    }
}
