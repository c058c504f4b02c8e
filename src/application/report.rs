//! Static HTML performance report.

use crate::application::statistics::{account_summary, compute_statistics};
use crate::domain::entities::trade::TradeRecord;
use crate::domain::error::DomainError;
use crate::domain::values::risk_config::RiskConfig;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write;

const STYLE: &str = "body { font-family: Arial, sans-serif; margin: 20px; }
h1, h2 { color: #333; }
table { border-collapse: collapse; width: 100%; margin-bottom: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
tr:nth-child(even) { background-color: #f9f9f9; }
.positive { color: green; }
.negative { color: red; }
.summary { background-color: #f0f0f0; padding: 15px; border-radius: 5px; margin-bottom: 20px; }";

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn pct(v: Decimal) -> Decimal {
    v.saturating_mul(Decimal::ONE_HUNDRED)
}

/// Round half away from zero and pad to `dp` places.
fn fixed(v: Decimal, dp: u32) -> String {
    format!(
        "{:.*}",
        dp as usize,
        v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Recommendations keyed off the headline metrics.
pub fn recommendations(
    win_rate: Decimal,
    profit_factor: Decimal,
    drawdown_ratio: Decimal,
    expectancy: Decimal,
) -> Vec<&'static str> {
    let mut out = Vec::new();
    if win_rate < Decimal::new(4, 1) {
        out.push("Win rate is low; review the trading system or strategy.");
    }
    if profit_factor < Decimal::ONE {
        out.push("Average loss exceeds average win; revisit stop-loss and take-profit placement.");
    }
    if drawdown_ratio > Decimal::new(2, 1) {
        out.push("Max drawdown is large; tighten risk control.");
    }
    if expectancy <= Decimal::ZERO {
        out.push("Expectancy is not positive; the system is likely to lose over time.");
    }
    out
}

pub fn render_html_report(
    trades: &[TradeRecord],
    config: &RiskConfig,
    generated_at: DateTime<Utc>,
) -> Result<String, DomainError> {
    if trades.is_empty() {
        return Err(DomainError::InvalidInput(
            "No trades recorded, nothing to report".into(),
        ));
    }

    let stats = compute_statistics(trades);
    let summary = account_summary(trades, config);
    let stamp = generated_at.format("%Y-%m-%d %H:%M:%S");
    let fmt_err = |e: std::fmt::Error| DomainError::Parse(format!("report formatting failed: {e}"));

    let mut html = String::new();
    write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Trading Report</title>\n<style>\n{STYLE}\n</style>\n</head>\n<body>\n\
         <h1>Trading Report</h1>\n<p>Generated: {stamp}</p>\n<p>User: {}</p>\n",
        escape(&config.user_name)
    )
    .map_err(fmt_err)?;

    write!(
        html,
        "<div class=\"summary\">\n<h2>Overview</h2>\n\
         <p>Initial capital: {}</p>\n<p>Current capital: {}</p>\n\
         <p>Total return: {}%</p>\n<p>Total trades: {}</p>\n\
         <p>Win rate: {}%</p>\n<p>Profit factor: {}</p>\n\
         <p>Max drawdown: {} ({}%)</p>\n</div>\n",
        fixed(summary.initial_capital, 2),
        fixed(summary.current_capital, 2),
        fixed(pct(summary.total_return), 2),
        stats.total_trades,
        fixed(pct(stats.win_rate), 1),
        fixed(stats.profit_factor, 2),
        fixed(stats.max_drawdown, 2),
        fixed(pct(summary.max_drawdown_pct), 2),
    )
    .map_err(fmt_err)?;

    html.push_str("<h2>Statistics</h2>\n<table>\n<tr><th>Metric</th><th>Value</th></tr>\n");
    let rows = [
        ("Total trades", stats.total_trades.to_string()),
        ("Winning trades", stats.winning_trades.to_string()),
        ("Losing trades", stats.losing_trades.to_string()),
        ("Win rate", format!("{}%", fixed(pct(stats.win_rate), 1))),
        ("Average profit", fixed(stats.avg_profit, 2)),
        ("Average loss", fixed(stats.avg_loss, 2)),
        ("Profit factor", fixed(stats.profit_factor, 2)),
        ("Expectancy", fixed(stats.expectancy, 2)),
        ("Max drawdown", fixed(stats.max_drawdown, 2)),
    ];
    for (name, value) in rows {
        writeln!(html, "<tr><td>{name}</td><td>{value}</td></tr>").map_err(fmt_err)?;
    }
    html.push_str("</table>\n");

    html.push_str(
        "<h2>Trades</h2>\n<table>\n<tr><th>Date</th><th>Time</th><th>Symbol</th><th>Direction</th>\
         <th>Price</th><th>Quantity</th><th>Stop</th><th>Target</th><th>Outcome</th><th>PnL</th><th>Note</th></tr>\n",
    );
    let mut sorted: Vec<&TradeRecord> = trades.iter().collect();
    sorted.sort_by(|a, b| (&a.date, &a.time).cmp(&(&b.date, &b.time)));
    for t in sorted {
        let class = if t.pnl > Decimal::ZERO {
            "positive"
        } else if t.pnl < Decimal::ZERO {
            "negative"
        } else {
            ""
        };
        writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"{class}\">{}</td><td>{}</td></tr>",
            escape(&t.date),
            escape(&t.time),
            escape(&t.symbol),
            t.direction,
            t.price,
            t.quantity,
            t.stop_price.map(|d| d.to_string()).unwrap_or_default(),
            t.target_price.map(|d| d.to_string()).unwrap_or_default(),
            t.outcome,
            fixed(t.pnl, 2),
            escape(&t.note),
        )
        .map_err(fmt_err)?;
    }
    html.push_str("</table>\n");

    html.push_str("<h2>Recommendations</h2>\n<ul>\n");
    for rec in recommendations(
        stats.win_rate,
        stats.profit_factor,
        summary.max_drawdown_pct,
        stats.expectancy,
    ) {
        writeln!(html, "<li>{rec}</li>").map_err(fmt_err)?;
    }
    write!(
        html,
        "</ul>\n<footer>\n<p>Report generated: {stamp}</p>\n</footer>\n</body>\n</html>\n"
    )
    .map_err(fmt_err)?;

    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_recommendations_healthy() {
        assert!(recommendations(dec!(0.6), dec!(2), dec!(0.05), dec!(100)).is_empty());
    }

    #[test]
    fn test_recommendations_all() {
        assert_eq!(
            recommendations(dec!(0.2), dec!(0.5), dec!(0.3), dec!(-10)).len(),
            4
        );
    }
}
