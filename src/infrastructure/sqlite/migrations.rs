use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS trades (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            time TEXT NOT NULL DEFAULT '',
            symbol TEXT NOT NULL,
            direction TEXT NOT NULL,
            price TEXT NOT NULL,
            quantity TEXT NOT NULL,
            stop_price TEXT,
            target_price TEXT,
            outcome TEXT NOT NULL,
            pnl TEXT NOT NULL,
            note TEXT NOT NULL DEFAULT '',
            seq INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS journal_entries (
            id TEXT PRIMARY KEY,
            date TEXT NOT NULL,
            kind TEXT NOT NULL,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS heart_quotes (
            id TEXT PRIMARY KEY,
            category TEXT NOT NULL,
            quote TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_trades_date ON trades(date, time);
        CREATE INDEX IF NOT EXISTS idx_trades_symbol ON trades(symbol);
        CREATE INDEX IF NOT EXISTS idx_journal_date ON journal_entries(date);
        ",
    )
    .map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
