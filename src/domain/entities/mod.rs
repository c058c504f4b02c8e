pub mod heart_quote;
pub mod journal_entry;
pub mod trade;
