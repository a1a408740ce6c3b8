//! consult-core
//!
//! Budget aggregation and affordability logic.
//! Depends on consult-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod affordability_service;
pub mod budget_service;
pub mod error;
pub mod storage;
pub mod summary_service;
pub mod validation;

pub use affordability_service::*;
pub use budget_service::*;
pub use error::CoreError;
pub use summary_service::*;
