use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradejournal", about = "Trading-discipline journal and risk statistics")]
pub struct Cli {
    /// SQLite database holding trades, journal entries and quotes
    #[arg(long, env = "TRADEJOURNAL_DB", default_value = "./tradejournal.db")]
    pub db: String,
    /// JSON file holding the risk settings
    #[arg(long, env = "TRADEJOURNAL_CONFIG", default_value = "./config.json")]
    pub config: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a trade
    TradeAdd {
        /// JSON with date, time, symbol, direction, price, quantity, stop_price, target_price, outcome, pnl, note
        json: String,
    },
    /// Replace a trade, keeping its id
    TradeEdit {
        id: String,
        /// Same fields as trade-add
        json: String,
    },
    /// Delete a trade by id
    TradeDelete { id: String },
    /// List trades in chronological order
    Trades {
        /// Show only the most recent N trades
        #[arg(long)]
        limit: Option<usize>,
        /// Earliest trade date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Import a JSON array of trades (legacy journal files accepted)
    Import { file: String },
    /// Export all trades as CSV
    ExportCsv { file: String },
    /// Show trade statistics
    Stats,
    /// Check risk limits
    Warnings,
    /// Show capital, return and drawdown
    Summary,
    /// Write an HTML performance report
    Report { file: String },
    /// Suggest a position size for a planned trade
    PositionSize {
        #[arg(long)]
        entry: String,
        #[arg(long)]
        stop: String,
        /// buy or sell
        #[arg(long, default_value = "buy")]
        direction: String,
        /// Override the configured capital
        #[arg(long)]
        capital: Option<String>,
        /// Override the configured risk fraction (0.02 = 2%)
        #[arg(long)]
        risk: Option<String>,
    },
    /// Print the risk settings
    ConfigShow,
    /// Replace the risk settings; omitted fields take their defaults
    ConfigSet { json: String },
    /// Add a journal entry
    JournalAdd {
        /// JSON with date, kind, title, content
        json: String,
    },
    /// List journal entries, newest first
    Journal {
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Delete a journal entry by id
    JournalDelete { id: String },
    /// Add a heart quote
    QuoteAdd {
        /// JSON with category, quote
        json: String,
    },
    /// Replace a heart quote's category and text
    QuoteEdit { id: String, json: String },
    /// Delete a heart quote by id
    QuoteDelete { id: String },
    /// List heart quotes
    Quotes,
    /// Store the default quotes if there are none
    QuoteSeed,
    /// Show the quote for a day (today by default)
    QuoteDaily {
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a random quote
    QuoteRandom,
}
