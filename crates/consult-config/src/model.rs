use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Stores user-configurable preferences and consult thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    /// Fraction of monthly income above which a consult warns.
    #[serde(default = "Config::default_income_share_warning")]
    pub income_share_warning: f64,
    /// Annual percent above which a debt consult warns.
    #[serde(default = "Config::default_high_interest_rate")]
    pub high_interest_rate: f64,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for snapshots. Defaults to `<data dir>/snapshots`.
    pub snapshot_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            income_share_warning: Self::default_income_share_warning(),
            high_interest_rate: Self::default_high_interest_rate(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            snapshot_root: None,
        }
    }
}

impl Config {
    pub fn default_income_share_warning() -> f64 {
        0.3
    }

    pub fn default_high_interest_rate() -> f64 {
        20.0
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_snapshot_root(&self, data_dir: &std::path::Path) -> PathBuf {
        if let Some(path) = &self.snapshot_root {
            return path.clone();
        }
        data_dir.join("snapshots")
    }

    /// Default application data directory (`~/.budget_consult`).
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".budget_consult")
    }

    pub fn set_currency(&mut self, code: &str) -> Result<(), ConfigError> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidSetting {
                key: "currency".into(),
                reason: format!("`{code}` is not a three-letter ISO 4217 code"),
            });
        }
        self.currency = trimmed.to_ascii_uppercase();
        Ok(())
    }

    pub fn set_income_share_warning(&mut self, share: f64) -> Result<(), ConfigError> {
        if !share.is_finite() || share <= 0.0 || share > 1.0 {
            return Err(ConfigError::InvalidSetting {
                key: "income_share_warning".into(),
                reason: format!("{share} must be a fraction in (0, 1]"),
            });
        }
        self.income_share_warning = share;
        Ok(())
    }

    pub fn set_high_interest_rate(&mut self, rate: f64) -> Result<(), ConfigError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ConfigError::InvalidSetting {
                key: "high_interest_rate".into(),
                reason: format!("{rate} must be a non-negative percent"),
            });
        }
        self.high_interest_rate = rate;
        Ok(())
    }
}
