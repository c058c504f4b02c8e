mod common;

use common::{add_series, make_input, setup, setup_with};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tradejournal::application::statistics::{
    check_risk_warnings, compute_statistics, max_consecutive_losses, max_drawdown,
};
use tradejournal::domain::values::risk_config::RiskConfig;
use tradejournal::domain::values::risk_warning::RiskWarningKind;
use tradejournal::domain::values::trade_stats::StatsResult;

#[test]
fn test_empty_journal() {
    let tj = setup();
    assert_eq!(tj.stats().unwrap(), StatsResult::default());
    assert!(tj.warnings().unwrap().is_empty());
}

#[test]
fn test_drawdown_150_with_four_loss_streak() {
    let tj = setup();
    // Peak 130 after the first two trades, then four losses down to -20.
    add_series(&tj, &[dec!(100), dec!(30), dec!(-50), dec!(-40), dec!(-40), dec!(-20)]);

    let stats = tj.stats().unwrap();
    assert_eq!(stats.max_drawdown, dec!(150));

    let trades = tj.trade_list(None, None, None).unwrap();
    assert_eq!(max_consecutive_losses(&trades), 4);

    // A streak of 4 is below the threshold of 5.
    let warnings = tj.warnings().unwrap();
    assert!(warnings
        .iter()
        .all(|w| !matches!(w.kind, RiskWarningKind::ConsecutiveLosses { .. })));
    assert!(warnings.is_empty());
}

#[test]
fn test_mixed_sequence_drawdown_and_streak() {
    let tj = setup();
    // Cumulative: 100, 50, 80, 0, -40, -60, -70.
    add_series(
        &tj,
        &[dec!(100), dec!(-50), dec!(30), dec!(-80), dec!(-40), dec!(-20), dec!(-10)],
    );
    let trades = tj.trade_list(None, None, None).unwrap();
    assert_eq!(max_drawdown(&trades), dec!(170));
    assert_eq!(max_consecutive_losses(&trades), 4);
    assert!(tj.warnings().unwrap().is_empty());
}

#[test]
fn test_five_loss_streak_warns() {
    let tj = setup();
    add_series(&tj, &[dec!(10), dec!(-1), dec!(-1), dec!(-1), dec!(-1), dec!(-1), dec!(3)]);
    let warnings = tj.warnings().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, RiskWarningKind::ConsecutiveLosses { streak: 5 });
    assert!(warnings[0].message.contains('5'));
}

#[test]
fn test_same_day_losses_trigger_one_daily_warning() {
    let tj = setup();
    tj.trade_add(make_input("2024-01-01", "09:30", "IF", dec!(-6000))).unwrap();
    tj.trade_add(make_input("2024-01-01", "14:00", "IF", dec!(-5000))).unwrap();

    let warnings = tj.warnings().unwrap();
    let daily: Vec<_> = warnings
        .iter()
        .filter_map(|w| match &w.kind {
            RiskWarningKind::DailyLossExceeded { date, loss, limit } => Some((date, loss, limit)),
            _ => None,
        })
        .collect();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].0, "2024-01-01");
    assert_eq!(*daily[0].1, dec!(11000));
    assert_eq!(*daily[0].2, dec!(5000));
    assert!(warnings.iter().any(|w| w.message.contains("2024-01-01")));
}

#[test]
fn test_daily_warnings_ascend_when_added_newest_first() {
    let tj = setup();
    tj.trade_add(make_input("2024-04-05", "09:30", "IF", dec!(-6000))).unwrap();
    tj.trade_add(make_input("2024-04-04", "09:30", "IF", dec!(100))).unwrap();
    tj.trade_add(make_input("2024-04-03", "09:30", "IF", dec!(-7000))).unwrap();
    tj.trade_add(make_input("2024-04-01", "09:30", "IF", dec!(-5500))).unwrap();

    let warnings = tj.warnings().unwrap();
    assert_eq!(warnings.len(), 4);
    // Cumulative low is -18400 against a 10000 alert line.
    assert!(matches!(warnings[0].kind, RiskWarningKind::DrawdownExceeded { .. }));
    let dates: Vec<&str> = warnings[1..]
        .iter()
        .map(|w| match &w.kind {
            RiskWarningKind::DailyLossExceeded { date, .. } => date.as_str(),
            other => panic!("unexpected warning: {other:?}"),
        })
        .collect();
    assert_eq!(dates, vec!["2024-04-01", "2024-04-03", "2024-04-05"]);
}

#[test]
fn test_same_day_trades_keep_insertion_order_for_drawdown() {
    let tj = setup();
    tj.trade_add(make_input("2024-01-01", "10:00", "IF", dec!(-50))).unwrap();
    tj.trade_add(make_input("2024-01-01", "11:00", "IF", dec!(100))).unwrap();
    tj.trade_add(make_input("2024-01-01", "09:00", "IF", dec!(-50))).unwrap();

    // Curve follows insertion order (-50, +50, 0), not the clock.
    assert_eq!(tj.stats().unwrap().max_drawdown, dec!(50));
    assert_eq!(tj.summary().unwrap().max_drawdown_pct, dec!(0.0005));
    let snapshot = tj.trade_snapshot().unwrap();
    assert_eq!(max_drawdown(&snapshot), dec!(50));
    // The streak still orders by time: 09:00 and 10:00 are back to back.
    assert_eq!(max_consecutive_losses(&snapshot), 2);
}

#[test]
fn test_daily_loss_at_limit_does_not_warn() {
    let tj = setup();
    tj.trade_add(make_input("2024-01-01", "09:30", "IF", dec!(-5000))).unwrap();
    let warnings = tj.warnings().unwrap();
    assert!(warnings
        .iter()
        .all(|w| !matches!(w.kind, RiskWarningKind::DailyLossExceeded { .. })));
}

#[test]
fn test_drawdown_warning_uses_config() {
    let config = RiskConfig {
        initial_capital: dec!(1000),
        max_drawdown_alert: dec!(0.1),
        daily_loss_limit: dec!(1),
        ..Default::default()
    };
    let tj = setup_with(config);
    add_series(&tj, &[dec!(50), dec!(-160)]);

    let warnings = tj.warnings().unwrap();
    assert_eq!(warnings.len(), 1);
    match &warnings[0].kind {
        RiskWarningKind::DrawdownExceeded { drawdown_pct, alert } => {
            assert_eq!(*drawdown_pct, dec!(0.16));
            assert_eq!(*alert, dec!(0.1));
        }
        other => panic!("unexpected warning: {other:?}"),
    }
}

#[test]
fn test_profit_factor_guarded_without_losses() {
    let tj = setup();
    add_series(&tj, &[dec!(100), dec!(300)]);
    let stats = tj.stats().unwrap();
    assert_eq!(stats.avg_profit, dec!(200));
    assert_eq!(stats.avg_loss, Decimal::ZERO);
    assert_eq!(stats.profit_factor, Decimal::ZERO);
}

#[test]
fn test_profit_factor_is_average_ratio() {
    let tj = setup();
    // Gross 300 / 300 would be 1; averages give 150 / 300.
    add_series(&tj, &[dec!(100), dec!(200), dec!(-300)]);
    let stats = tj.stats().unwrap();
    assert_eq!(stats.profit_factor, dec!(0.5));
}

#[test]
fn test_breakeven_counts_only_in_total() {
    let tj = setup();
    add_series(&tj, &[dec!(50), dec!(0), dec!(-25), dec!(0)]);
    let stats = tj.stats().unwrap();
    assert_eq!(stats.total_trades, 4);
    assert_eq!(stats.winning_trades, 1);
    assert_eq!(stats.losing_trades, 1);
    assert_eq!(stats.win_rate, dec!(0.25));
    // 0.25 * 50 - 0.75 * 25
    assert_eq!(stats.expectancy, dec!(-6.25));
}

#[test]
fn test_invariants_hold_across_inputs() {
    let cases: Vec<Vec<Decimal>> = vec![
        vec![dec!(1)],
        vec![dec!(-1)],
        vec![dec!(0), dec!(0)],
        vec![dec!(10), dec!(20), dec!(30)],
        vec![dec!(-5), dec!(7.5), dec!(0), dec!(-12.25), dec!(40)],
    ];
    for pnls in cases {
        let tj = setup();
        add_series(&tj, &pnls);
        let trades = tj.trade_list(None, None, None).unwrap();

        let first = compute_statistics(&trades);
        let second = compute_statistics(&trades);
        assert_eq!(first, second);

        assert!(first.winning_trades + first.losing_trades <= first.total_trades);
        assert!(first.win_rate >= Decimal::ZERO && first.win_rate <= Decimal::ONE);
        assert!(first.max_drawdown >= Decimal::ZERO);
        assert!(first.avg_loss >= Decimal::ZERO);
    }
}

#[test]
fn test_non_decreasing_curve_has_no_drawdown() {
    let tj = setup();
    add_series(&tj, &[dec!(10), dec!(0), dec!(20), dec!(0.5)]);
    assert_eq!(tj.stats().unwrap().max_drawdown, Decimal::ZERO);
}

#[test]
fn test_engine_on_unsorted_snapshot() {
    let tj = setup();
    tj.trade_add(make_input("2024-05-03", "", "X", dec!(20))).unwrap();
    tj.trade_add(make_input("2024-05-01", "", "X", dec!(100))).unwrap();
    tj.trade_add(make_input("2024-05-02", "", "X", dec!(-150))).unwrap();

    let mut trades = tj.trade_list(None, None, None).unwrap();
    trades.reverse();
    assert_eq!(compute_statistics(&trades).max_drawdown, dec!(150));
    assert!(check_risk_warnings(&trades, &RiskConfig::default()).is_empty());
}

#[test]
fn test_summary() {
    let tj = setup();
    add_series(&tj, &[dec!(2000), dec!(-1000)]);
    let summary = tj.summary().unwrap();
    assert_eq!(summary.total_pnl, dec!(1000));
    assert_eq!(summary.current_capital, dec!(101000));
    assert_eq!(summary.total_return, dec!(0.01));
    assert_eq!(summary.max_drawdown_pct, dec!(0.01));
    assert_eq!(summary.open_trades, 0);
}

#[test]
fn test_engine_runs_on_worker_thread() {
    let tj = setup();
    add_series(&tj, &[dec!(5), dec!(-2)]);
    let trades = tj.trade_snapshot().unwrap();
    let expected = compute_statistics(&trades);
    let handle = std::thread::spawn(move || compute_statistics(&trades));
    assert_eq!(handle.join().unwrap(), expected);
}
