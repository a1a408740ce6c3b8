use std::{env, path::PathBuf};

use consult_config::Config;

const HOME_ENV: &str = "BUDGET_CONSULT_HOME";

/// Returns the application-specific data directory, defaulting to `~/.budget_consult`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    Config::default_data_dir()
}

/// Directory holding stored snapshots, honouring the configured override.
pub fn snapshots_dir(config: &Config) -> PathBuf {
    config.resolve_snapshot_root(&app_data_dir())
}
