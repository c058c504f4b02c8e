use crate::domain::entities::journal_entry::JournalEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::values::journal_kind::JournalKind;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::sync::Mutex;
use tracing::warn;

pub struct SqliteJournalRepo {
    conn: Mutex<Connection>,
}

impl SqliteJournalRepo {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    fn row_to_entry(row: &rusqlite::Row) -> Result<JournalEntry, rusqlite::Error> {
        let kind_str: String = row.get(2)?;
        let created_str: String = row.get(5)?;

        Ok(JournalEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            kind: kind_str.parse::<JournalKind>().unwrap_or_else(|e: String| {
                warn!("{e}, reading journal entry as 'other'");
                Default::default()
            }),
            title: row.get(3)?,
            content: row.get(4)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
        })
    }
}

impl JournalRepository for SqliteJournalRepo {
    fn add_entry(&self, entry: &JournalEntry) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT INTO journal_entries (id, date, kind, title, content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                entry.id,
                entry.date,
                entry.kind.to_string(),
                entry.title,
                entry.content,
                entry.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::Database(format!("Failed to add journal entry: {e}")))?;
        Ok(())
    }

    fn delete_entry(&self, id: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM journal_entries WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete journal entry: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Journal entry not found: {id}")));
        }
        Ok(())
    }

    fn list_entries(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        // SQLite treats a negative LIMIT as unbounded.
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let mut stmt = conn
            .prepare(
                "SELECT id, date, kind, title, content, created_at FROM journal_entries
                 ORDER BY date DESC, created_at DESC LIMIT ?1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let entries = stmt
            .query_map(params![limit], Self::row_to_entry)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(entries)
    }

    fn get_entry(&self, id: &str) -> Result<Option<JournalEntry>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare(
                "SELECT id, date, kind, title, content, created_at FROM journal_entries WHERE id = ?1",
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut rows = stmt
            .query_map(params![id], Self::row_to_entry)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(rows.next().and_then(|r| r.ok()))
    }
}
