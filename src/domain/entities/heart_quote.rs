use crate::domain::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trading maxim shown as the daily reminder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartQuote {
    pub id: String,
    /// Free-form grouping such as "Risk control" or "Psychology".
    pub category: String,
    pub quote: String,
    pub created_at: DateTime<Utc>,
}

/// Seeded into an empty collection; the last one doubles as the fallback.
pub const DEFAULT_QUOTES: [(&str, &str); 3] = [
    (
        "Trading system",
        "A complete trading system covers entries, exits, stops, money management and psychology. None of them is optional.",
    ),
    (
        "Risk control",
        "Risk first, profit second. Without risk control there is no long-term profit.",
    ),
    (
        "Psychology",
        "Trading is a psychological game; controlling your emotions matters more than predicting the market.",
    ),
];

fn checked(category: String, quote: String) -> Result<(String, String), DomainError> {
    let category = category.trim().to_string();
    let quote = quote.trim().to_string();
    if category.is_empty() {
        return Err(DomainError::InvalidInput("category is required".into()));
    }
    if quote.is_empty() {
        return Err(DomainError::InvalidInput("quote is required".into()));
    }
    Ok((category, quote))
}

impl HeartQuote {
    pub fn new(category: String, quote: String) -> Result<Self, DomainError> {
        let (category, quote) = checked(category, quote)?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            quote,
            created_at: Utc::now(),
        })
    }

    /// Same quote with new text; id and creation time are kept.
    pub fn edited(&self, category: String, quote: String) -> Result<Self, DomainError> {
        let (category, quote) = checked(category, quote)?;
        Ok(Self {
            category,
            quote,
            ..self.clone()
        })
    }

    /// Shown when the collection is empty. Never stored.
    pub fn fallback() -> Self {
        let (category, quote) = DEFAULT_QUOTES[2];
        Self {
            id: String::new(),
            category: category.to_string(),
            quote: quote.to_string(),
            created_at: DateTime::<Utc>::default(),
        }
    }
}
