//! mindcheck-core
//!
//! Pure domain types for screening answers and triage outcomes.
//! No I/O — this is the shared vocabulary of the MindCheck system.

pub mod error;
pub mod models;
