use rust_decimal_macros::dec;
use std::sync::Arc;
use tradejournal::domain::ports::config_store::ConfigStore;
use tradejournal::domain::values::risk_config::RiskConfig;
use tradejournal::domain::values::trade_direction::TradeDirection;
use tradejournal::infrastructure::config::json_file::JsonConfigStore;
use tradejournal::infrastructure::config::memory::MemoryConfigStore;
use tradejournal::TradeJournal;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonConfigStore::new(dir.path().join("config.json"));
    assert_eq!(store.load().unwrap(), RiskConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let store = JsonConfigStore::new(&path);

    let config = RiskConfig {
        initial_capital: dec!(250000),
        daily_loss_limit: dec!(0.03),
        user_name: "tony".into(),
        ..Default::default()
    };
    store.save(&config).unwrap();
    assert!(path.exists());

    let reloaded = JsonConfigStore::new(&path).load().unwrap();
    assert_eq!(reloaded, config);
}

#[test]
fn test_legacy_numeric_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"initial_capital": 100000, "risk_per_trade": 0.02, "max_position_size": 0.3,
            "max_drawdown_alert": 0.15, "daily_loss_limit": 0.05, "profit_target": 0.5,
            "user_name": "trader"}"#,
    )
    .unwrap();
    let config = JsonConfigStore::new(&path).load().unwrap();
    assert_eq!(config.max_drawdown_alert, dec!(0.15));
    assert_eq!(config.user_name, "trader");
}

#[test]
fn test_invalid_config_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let store = JsonConfigStore::new(&path);
    let bad = RiskConfig {
        risk_per_trade: dec!(0),
        ..Default::default()
    };
    assert!(store.save(&bad).is_err());
    assert!(!path.exists());
}

#[test]
fn test_corrupt_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = JsonConfigStore::new(&path).load().unwrap_err();
    assert!(err.to_string().starts_with("Config error"));
}

#[test]
fn test_position_size_uses_config() {
    let store = Arc::new(MemoryConfigStore::new(RiskConfig {
        initial_capital: dec!(50000),
        risk_per_trade: dec!(0.01),
        ..Default::default()
    }));
    let tj = TradeJournal::with_config_store(":memory:", store).unwrap();

    let sizing = tj
        .position_size(TradeDirection::Buy, dec!(25), dec!(24.5), None, None)
        .unwrap();
    assert_eq!(sizing.risk_amount, dec!(500));
    assert_eq!(sizing.position_size, dec!(1000));

    let overridden = tj
        .position_size(TradeDirection::Sell, dec!(25), dec!(26), Some(dec!(10000)), Some(dec!(0.02)))
        .unwrap();
    assert_eq!(overridden.risk_amount, dec!(200));
    assert_eq!(overridden.position_size, dec!(200));
}

#[test]
fn test_set_config_through_journal() {
    let tj = TradeJournal::with_config_store(":memory:", Arc::new(MemoryConfigStore::default()))
        .unwrap();
    let mut config = tj.config().unwrap();
    config.initial_capital = dec!(20000);
    tj.set_config(&config).unwrap();
    assert_eq!(tj.config().unwrap().initial_capital, dec!(20000));

    config.max_drawdown_alert = dec!(2);
    assert!(tj.set_config(&config).is_err());
    assert_eq!(tj.config().unwrap().max_drawdown_alert, dec!(0.1));
}
