//! consult-config
//!
//! Persistent user preferences and consult thresholds.
//! Owns the Config data structure plus disk persistence helpers.

pub mod error;
pub mod manager;
pub mod model;
pub mod persist;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
