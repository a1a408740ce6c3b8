//! consult-domain
//!
//! Pure domain models (records, snapshots, consult inputs and results).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod common;
pub mod consult;
pub mod records;

pub use common::*;
pub use consult::*;
pub use records::*;
