pub mod config;
pub mod sqlite;
