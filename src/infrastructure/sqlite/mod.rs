pub mod journal_repo;
pub mod migrations;
pub mod quote_repo;
pub mod trade_repo;
