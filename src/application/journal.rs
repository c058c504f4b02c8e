use crate::domain::entities::journal_entry::JournalEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::values::journal_kind::JournalKind;
use std::sync::Arc;
use tracing::info;

pub struct JournalUseCase {
    repo: Arc<dyn JournalRepository>,
}

impl JournalUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub fn add(
        &self,
        date: String,
        kind: JournalKind,
        title: String,
        content: String,
    ) -> Result<JournalEntry, DomainError> {
        let entry = JournalEntry::new(date, kind, title, content)?;
        self.repo.add_entry(&entry)?;
        info!(id = %entry.id, kind = %entry.kind, "journal entry added");
        Ok(entry)
    }

    pub fn get(&self, id: &str) -> Result<JournalEntry, DomainError> {
        self.repo
            .get_entry(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Journal entry not found: {id}")))
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete_entry(id)?;
        info!(id, "journal entry deleted");
        Ok(())
    }

    pub fn list(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>, DomainError> {
        self.repo.list_entries(limit)
    }
}
