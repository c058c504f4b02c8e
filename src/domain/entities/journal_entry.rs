use crate::domain::error::DomainError;
use crate::domain::values::journal_kind::JournalKind;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    /// Day the entry is about, "YYYY-MM-DD".
    pub date: String,
    pub kind: JournalKind,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    pub fn new(
        date: String,
        kind: JournalKind,
        title: String,
        content: String,
    ) -> Result<Self, DomainError> {
        let date = date.trim().to_string();
        if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            return Err(DomainError::InvalidInput(format!(
                "Invalid date: {date:?}. Use YYYY-MM-DD"
            )));
        }
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("title is required".into()));
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            kind,
            title,
            content,
            created_at: Utc::now(),
        })
    }
}
