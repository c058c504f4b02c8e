use crate::domain::entities::heart_quote::HeartQuote;
use crate::domain::error::DomainError;

/// Heart-quote storage. `list_quotes` returns quotes in the order they were added.
pub trait QuoteRepository: Send + Sync {
    fn add_quote(&self, quote: &HeartQuote) -> Result<(), DomainError>;
    fn update_quote(&self, quote: &HeartQuote) -> Result<(), DomainError>;
    fn delete_quote(&self, id: &str) -> Result<(), DomainError>;
    fn list_quotes(&self) -> Result<Vec<HeartQuote>, DomainError>;
    fn get_quote(&self, id: &str) -> Result<Option<HeartQuote>, DomainError>;
}
