mod common;

use chrono::TimeZone;
use common::{add_series, make_input, setup};
use rust_decimal_macros::dec;

fn fixed_time() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_report_requires_trades() {
    let tj = setup();
    assert!(tj.report(fixed_time()).is_err());
}

#[test]
fn test_report_contents() {
    let tj = setup();
    add_series(&tj, &[dec!(300), dec!(-100), dec!(200)]);
    let html = tj.report(fixed_time()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Generated: 2024-06-01 12:00:00"));
    assert!(html.contains("<p>Total trades: 3</p>"));
    assert!(html.contains("<p>Current capital: 100400.00</p>"));
    assert!(html.contains("<p>Win rate: 66.7%</p>"));
    assert!(html.contains("class=\"positive\">300.00"));
    assert!(html.contains("class=\"negative\">-100.00"));
    // Healthy record: no recommendations listed.
    assert!(!html.contains("<li>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_report_recommendations_and_escaping() {
    let tj = setup();
    let mut input = make_input("2024-01-01", "09:00", "AU", dec!(-500));
    input.note = "<script>alert(1)</script>".into();
    tj.trade_add(input).unwrap();

    let html = tj.report(fixed_time()).unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("Win rate is low"));
    assert!(html.contains("Expectancy is not positive"));
    assert!(html.contains("Average loss exceeds average win"));
}
