use chrono::NaiveDate;
use clap::Parser;
use rust_decimal::Decimal;
use std::str::FromStr;
use tradejournal::application::statistics::{check_risk_warnings, compute_statistics};
use tradejournal::cli::commands::{Cli, Commands};
use tradejournal::domain::entities::heart_quote::HeartQuote;
use tradejournal::domain::entities::trade::TradeInput;
use tradejournal::domain::values::journal_kind::JournalKind;
use tradejournal::domain::values::risk_config::RiskConfig;
use tradejournal::domain::values::trade_direction::TradeDirection;
use tradejournal::TradeJournal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tradejournal=info")),
        )
        .init();

    let cli = Cli::parse();

    let tj = match TradeJournal::new(&cli.db, &cli.config) {
        Ok(tj) => tj,
        Err(e) => {
            eprintln!("Error opening journal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(tj, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn quote_fields(json: &str) -> Result<(String, String), Box<dyn std::error::Error>> {
    let data: serde_json::Value = serde_json::from_str(json)?;
    let category = data["category"].as_str().ok_or("category required")?.to_string();
    let quote = data["quote"].as_str().ok_or("quote required")?.to_string();
    Ok((category, quote))
}

fn print_quote(quote: &HeartQuote) {
    println!("{}\n\n-- {}", quote.quote, quote.category);
}

fn parse_decimal(name: &str, s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s.trim()).map_err(|_| format!("Invalid number for {name}: {s}"))
}

async fn run_command(tj: TradeJournal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::TradeAdd { json } => {
            let input: TradeInput = serde_json::from_str(&json)?;
            let trade = tj.trade_add(input)?;
            print_json(&trade)?;
        }
        Commands::TradeEdit { id, json } => {
            let input: TradeInput = serde_json::from_str(&json)?;
            let trade = tj.trade_update(&id, input)?;
            print_json(&trade)?;
        }
        Commands::TradeDelete { id } => {
            tj.trade_delete(&id)?;
            println!("Trade {id} deleted");
        }
        Commands::Trades {
            limit,
            since,
            symbol,
        } => {
            let trades = tj.trade_list(limit, since, symbol)?;
            print_json(&trades)?;
        }
        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let trades = tj.import_json(&text)?;
            println!("Imported {} trades from {file}", trades.len());
        }
        Commands::ExportCsv { file } => {
            let out = std::fs::File::create(&file)?;
            let rows = tj.export_csv(out)?;
            println!("Exported {rows} trades to {file}");
        }
        Commands::Stats => {
            // Snapshot first, then run the engine off the async executor.
            let trades = tj.trade_snapshot()?;
            let stats = tokio::task::spawn_blocking(move || compute_statistics(&trades)).await?;
            print_json(&stats)?;
        }
        Commands::Warnings => {
            let trades = tj.trade_snapshot()?;
            let config = tj.config()?;
            let warnings =
                tokio::task::spawn_blocking(move || check_risk_warnings(&trades, &config)).await?;
            if warnings.is_empty() {
                eprintln!("No risk warnings");
            }
            print_json(&warnings)?;
        }
        Commands::Summary => {
            print_json(&tj.summary()?)?;
        }
        Commands::Report { file } => {
            let html = tj.report(chrono::Utc::now())?;
            std::fs::write(&file, html)?;
            println!("Report written to {file}");
        }
        Commands::PositionSize {
            entry,
            stop,
            direction,
            capital,
            risk,
        } => {
            let direction: TradeDirection = direction.parse()?;
            let sizing = tj.position_size(
                direction,
                parse_decimal("entry", &entry)?,
                parse_decimal("stop", &stop)?,
                capital.map(|c| parse_decimal("capital", &c)).transpose()?,
                risk.map(|r| parse_decimal("risk", &r)).transpose()?,
            )?;
            print_json(&sizing)?;
        }
        Commands::ConfigShow => {
            print_json(&tj.config()?)?;
        }
        Commands::ConfigSet { json } => {
            let config: RiskConfig = serde_json::from_str(&json)?;
            tj.set_config(&config)?;
            print_json(&config)?;
        }
        Commands::JournalAdd { json } => {
            let data: serde_json::Value = serde_json::from_str(&json)?;
            let date = data["date"].as_str().ok_or("date required")?.to_string();
            let title = data["title"].as_str().ok_or("title required")?.to_string();
            let content = data["content"].as_str().unwrap_or_default().to_string();
            let kind: JournalKind = data["kind"]
                .as_str()
                .map(|k| k.parse::<JournalKind>())
                .transpose()?
                .unwrap_or_default();
            let entry = tj.journal_add(date, kind, title, content)?;
            print_json(&entry)?;
        }
        Commands::Journal { limit } => {
            print_json(&tj.journal_list(Some(limit))?)?;
        }
        Commands::JournalDelete { id } => {
            tj.journal_delete(&id)?;
            println!("Journal entry {id} deleted");
        }
        Commands::QuoteAdd { json } => {
            let (category, quote) = quote_fields(&json)?;
            print_json(&tj.quote_add(category, quote)?)?;
        }
        Commands::QuoteEdit { id, json } => {
            let (category, quote) = quote_fields(&json)?;
            print_json(&tj.quote_update(&id, category, quote)?)?;
        }
        Commands::QuoteDelete { id } => {
            tj.quote_delete(&id)?;
            println!("Quote {id} deleted");
        }
        Commands::Quotes => {
            print_json(&tj.quote_list()?)?;
        }
        Commands::QuoteSeed => {
            let added = tj.quote_seed_defaults()?;
            println!("Seeded {added} quotes");
        }
        Commands::QuoteDaily { date } => {
            let date = match date {
                Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")?,
                None => chrono::Local::now().date_naive(),
            };
            print_quote(&tj.quote_daily(date)?);
        }
        Commands::QuoteRandom => {
            print_quote(&tj.quote_random()?);
        }
    }
    Ok(())
}
