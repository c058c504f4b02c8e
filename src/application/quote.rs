use crate::domain::entities::heart_quote::{HeartQuote, DEFAULT_QUOTES};
use crate::domain::error::DomainError;
use crate::domain::ports::quote_repository::QuoteRepository;
use chrono::{Datelike, NaiveDate};
use rand::seq::SliceRandom;
use std::sync::Arc;
use tracing::info;

pub struct QuoteUseCase {
    repo: Arc<dyn QuoteRepository>,
}

impl QuoteUseCase {
    pub fn new(repo: Arc<dyn QuoteRepository>) -> Self {
        Self { repo }
    }

    pub fn add(&self, category: String, quote: String) -> Result<HeartQuote, DomainError> {
        let quote = HeartQuote::new(category, quote)?;
        self.repo.add_quote(&quote)?;
        info!(id = %quote.id, category = %quote.category, "quote added");
        Ok(quote)
    }

    pub fn update(
        &self,
        id: &str,
        category: String,
        quote: String,
    ) -> Result<HeartQuote, DomainError> {
        let edited = self.get(id)?.edited(category, quote)?;
        self.repo.update_quote(&edited)?;
        info!(id, "quote updated");
        Ok(edited)
    }

    pub fn get(&self, id: &str) -> Result<HeartQuote, DomainError> {
        self.repo
            .get_quote(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Quote not found: {id}")))
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete_quote(id)?;
        info!(id, "quote deleted");
        Ok(())
    }

    pub fn list(&self) -> Result<Vec<HeartQuote>, DomainError> {
        self.repo.list_quotes()
    }

    /// Store the default quotes if the collection is empty. Returns how many were added.
    pub fn seed_defaults(&self) -> Result<usize, DomainError> {
        if !self.repo.list_quotes()?.is_empty() {
            return Ok(0);
        }
        for (category, quote) in DEFAULT_QUOTES {
            self.repo
                .add_quote(&HeartQuote::new(category.to_string(), quote.to_string())?)?;
        }
        info!(count = DEFAULT_QUOTES.len(), "default quotes seeded");
        Ok(DEFAULT_QUOTES.len())
    }

    pub fn random(&self) -> Result<HeartQuote, DomainError> {
        let quotes = self.repo.list_quotes()?;
        Ok(quotes
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_else(HeartQuote::fallback))
    }

    /// The quote for a given day. Stable for the same day and collection.
    pub fn daily(&self, date: NaiveDate) -> Result<HeartQuote, DomainError> {
        let quotes = self.repo.list_quotes()?;
        if quotes.is_empty() {
            return Ok(HeartQuote::fallback());
        }
        let idx = date.num_days_from_ce().rem_euclid(quotes.len() as i32) as usize;
        Ok(quotes[idx].clone())
    }
}
