use std::result::Result as StdResult;

use consult_config::ConfigError;
use consult_core::CoreError;
use thiserror::Error;

/// Unified error type for core/config/storage layers.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::InvalidInput(err.to_string())
    }
}

impl From<CoreError> for BudgetError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SnapshotNotFound(name) => BudgetError::SnapshotNotFound(name),
            CoreError::Serde(message) | CoreError::Validation(message) => {
                BudgetError::InvalidInput(message)
            }
            CoreError::Io(err) => BudgetError::StorageError(err.to_string()),
        }
    }
}

impl From<ConfigError> for BudgetError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => BudgetError::StorageError(io.to_string()),
            ConfigError::Serde(message) => BudgetError::ConfigError(message),
            invalid @ ConfigError::InvalidSetting { .. } => {
                BudgetError::ConfigError(invalid.to_string())
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(BudgetError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(BudgetError::from(err))
    }
}
