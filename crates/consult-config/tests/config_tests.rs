use consult_config::{Config, ConfigError, ConfigManager};
use tempfile::tempdir;

#[test]
fn default_config_uses_standard_thresholds() {
    let cfg = Config::default();

    assert_eq!(cfg.currency, "USD");
    assert_eq!(cfg.income_share_warning, 0.3);
    assert_eq!(cfg.high_interest_rate, 20.0);
}

#[test]
fn missing_config_file_loads_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded, Config::default());
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("config.json"));

    let mut cfg = Config::default();
    cfg.set_currency("eur").expect("valid currency");
    cfg.set_high_interest_rate(15.0).expect("valid rate");

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded.currency, "EUR");
    assert_eq!(loaded.high_interest_rate, 15.0);
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn older_config_files_gain_threshold_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"locale": "pt-PT", "currency": "EUR"}"#).expect("write");

    let loaded = ConfigManager::new(path).load().expect("load config");
    assert_eq!(loaded.locale, "pt-PT");
    assert_eq!(loaded.income_share_warning, 0.3);
    assert!(loaded.ui_color_enabled);
}

#[test]
fn malformed_config_reports_serde_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    let err = ConfigManager::new(path).load().expect_err("malformed");
    assert!(matches!(err, ConfigError::Serde(_)));
}

#[test]
fn invalid_settings_are_rejected() {
    let mut cfg = Config::default();
    assert!(cfg.set_currency("dollars").is_err());
    assert!(cfg.set_income_share_warning(1.5).is_err());
    assert!(cfg.set_high_interest_rate(-1.0).is_err());
    assert_eq!(cfg, Config::default());
}
