pub mod config_store;
pub mod journal_repository;
pub mod quote_repository;
pub mod trade_repository;
