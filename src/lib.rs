pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::journal::JournalUseCase;
use crate::application::quote::QuoteUseCase;
use crate::application::report::render_html_report;
use crate::application::statistics::{AccountSummary, StatisticsUseCase};
use crate::application::trade::TradeUseCase;
use crate::domain::entities::heart_quote::HeartQuote;
use crate::domain::entities::journal_entry::JournalEntry;
use crate::domain::entities::trade::{TradeInput, TradeRecord};
use crate::domain::error::DomainError;
use crate::domain::ports::config_store::ConfigStore;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::ports::quote_repository::QuoteRepository;
use crate::domain::ports::trade_repository::TradeRepository;
use crate::domain::values::journal_kind::JournalKind;
use crate::domain::values::position_sizing::PositionSizing;
use crate::domain::values::risk_config::RiskConfig;
use crate::domain::values::risk_warning::RiskWarning;
use crate::domain::values::trade_direction::TradeDirection;
use crate::domain::values::trade_stats::StatsResult;
use crate::infrastructure::config::json_file::JsonConfigStore;
use crate::infrastructure::sqlite::journal_repo::SqliteJournalRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use crate::infrastructure::sqlite::quote_repo::SqliteQuoteRepo;
use crate::infrastructure::sqlite::trade_repo::SqliteTradeRepo;
use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

pub struct TradeJournal {
    trade_uc: TradeUseCase,
    journal_uc: JournalUseCase,
    quote_uc: QuoteUseCase,
    stats_uc: StatisticsUseCase,
    config: Arc<dyn ConfigStore>,
}

fn open_connection(db_path: &str) -> Result<Connection, DomainError> {
    let conn =
        Connection::open(db_path).map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
    Ok(conn)
}

impl TradeJournal {
    /// Open the journal database and the JSON settings file.
    pub fn new(db_path: &str, config_path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Self::with_config_store(db_path, Arc::new(JsonConfigStore::new(config_path)))
    }

    pub fn with_config_store(
        db_path: &str,
        config: Arc<dyn ConfigStore>,
    ) -> Result<Self, DomainError> {
        // Each repo owns a connection; migrations are idempotent, and an
        // in-memory path gives every connection its own database.
        let trade_conn = open_connection(db_path)?;
        run_migrations(&trade_conn)?;
        let journal_conn = open_connection(db_path)?;
        run_migrations(&journal_conn)?;
        let quote_conn = open_connection(db_path)?;
        run_migrations(&quote_conn)?;

        let trade_repo: Arc<dyn TradeRepository> = Arc::new(SqliteTradeRepo::new(trade_conn));
        let journal_repo: Arc<dyn JournalRepository> =
            Arc::new(SqliteJournalRepo::new(journal_conn));
        let quote_repo: Arc<dyn QuoteRepository> = Arc::new(SqliteQuoteRepo::new(quote_conn));

        Ok(Self::from_parts(trade_repo, journal_repo, quote_repo, config))
    }

    pub fn from_parts(
        trade_repo: Arc<dyn TradeRepository>,
        journal_repo: Arc<dyn JournalRepository>,
        quote_repo: Arc<dyn QuoteRepository>,
        config: Arc<dyn ConfigStore>,
    ) -> Self {
        Self {
            trade_uc: TradeUseCase::new(trade_repo.clone()),
            journal_uc: JournalUseCase::new(journal_repo),
            quote_uc: QuoteUseCase::new(quote_repo),
            stats_uc: StatisticsUseCase::new(trade_repo, config.clone()),
            config,
        }
    }

    // Trades
    pub fn trade_add(&self, input: TradeInput) -> Result<TradeRecord, DomainError> {
        self.trade_uc.add(input)
    }

    pub fn trade_get(&self, id: &str) -> Result<TradeRecord, DomainError> {
        self.trade_uc.get(id)
    }

    pub fn trade_update(&self, id: &str, input: TradeInput) -> Result<TradeRecord, DomainError> {
        self.trade_uc.update(id, input)
    }

    pub fn trade_delete(&self, id: &str) -> Result<(), DomainError> {
        self.trade_uc.delete(id)
    }

    pub fn trade_list(
        &self,
        limit: Option<usize>,
        since: Option<String>,
        symbol: Option<String>,
    ) -> Result<Vec<TradeRecord>, DomainError> {
        self.trade_uc.list(limit, since, symbol)
    }

    /// All trades in insertion order, the input the statistics engine expects.
    pub fn trade_snapshot(&self) -> Result<Vec<TradeRecord>, DomainError> {
        self.trade_uc.snapshot()
    }

    pub fn import_json(&self, json: &str) -> Result<Vec<TradeRecord>, DomainError> {
        self.trade_uc.import_json(json)
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, DomainError> {
        self.trade_uc.export_csv(writer)
    }

    // Statistics
    pub fn stats(&self) -> Result<StatsResult, DomainError> {
        self.stats_uc.stats()
    }

    pub fn warnings(&self) -> Result<Vec<RiskWarning>, DomainError> {
        self.stats_uc.warnings()
    }

    pub fn summary(&self) -> Result<AccountSummary, DomainError> {
        self.stats_uc.summary()
    }

    pub fn report(&self, generated_at: DateTime<Utc>) -> Result<String, DomainError> {
        let trades = self.trade_snapshot()?;
        let config = self.config()?;
        render_html_report(&trades, &config, generated_at)
    }

    /// Size a position from the configured capital and risk fraction unless
    /// overrides are given.
    pub fn position_size(
        &self,
        direction: TradeDirection,
        entry_price: Decimal,
        stop_price: Decimal,
        capital: Option<Decimal>,
        risk_fraction: Option<Decimal>,
    ) -> Result<PositionSizing, DomainError> {
        let config = self.config()?;
        PositionSizing::calculate(
            capital.unwrap_or(config.initial_capital),
            risk_fraction.unwrap_or(config.risk_per_trade),
            direction,
            entry_price,
            stop_price,
        )
    }

    // Config
    pub fn config(&self) -> Result<RiskConfig, DomainError> {
        self.config.load()
    }

    pub fn set_config(&self, config: &RiskConfig) -> Result<(), DomainError> {
        self.config.save(config)
    }

    // Journal
    pub fn journal_add(
        &self,
        date: String,
        kind: JournalKind,
        title: String,
        content: String,
    ) -> Result<JournalEntry, DomainError> {
        self.journal_uc.add(date, kind, title, content)
    }

    pub fn journal_get(&self, id: &str) -> Result<JournalEntry, DomainError> {
        self.journal_uc.get(id)
    }

    pub fn journal_delete(&self, id: &str) -> Result<(), DomainError> {
        self.journal_uc.delete(id)
    }

    pub fn journal_list(&self, limit: Option<usize>) -> Result<Vec<JournalEntry>, DomainError> {
        self.journal_uc.list(limit)
    }

    // Heart quotes
    pub fn quote_add(&self, category: String, quote: String) -> Result<HeartQuote, DomainError> {
        self.quote_uc.add(category, quote)
    }

    pub fn quote_update(
        &self,
        id: &str,
        category: String,
        quote: String,
    ) -> Result<HeartQuote, DomainError> {
        self.quote_uc.update(id, category, quote)
    }

    pub fn quote_get(&self, id: &str) -> Result<HeartQuote, DomainError> {
        self.quote_uc.get(id)
    }

    pub fn quote_delete(&self, id: &str) -> Result<(), DomainError> {
        self.quote_uc.delete(id)
    }

    pub fn quote_list(&self) -> Result<Vec<HeartQuote>, DomainError> {
        self.quote_uc.list()
    }

    pub fn quote_seed_defaults(&self) -> Result<usize, DomainError> {
        self.quote_uc.seed_defaults()
    }

    pub fn quote_random(&self) -> Result<HeartQuote, DomainError> {
        self.quote_uc.random()
    }

    pub fn quote_daily(&self, date: NaiveDate) -> Result<HeartQuote, DomainError> {
        self.quote_uc.daily(date)
    }
}
