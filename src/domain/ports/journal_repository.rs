use crate::domain::entities::journal_entry::JournalEntry;
use crate::domain::error::DomainError;

pub trait JournalRepository: Send + Sync {
    fn add_entry(&self, entry: &JournalEntry) -> Result<(), DomainError>;
    fn delete_entry(&self, id: &str) -> Result<(), DomainError>;
    /// Newest first by date.
    fn list_entries(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>, DomainError>;
    fn get_entry(&self, id: &str) -> Result<Option<JournalEntry>, DomainError>;
}
