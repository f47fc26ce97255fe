//! Output writers for ledger state and summaries.
//!
//! This module handles:
//! - Reading and writing the JSON state file
//! - Text summaries for the terminal

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_state, state_to_string, write_state, LedgerState};
pub use summary::{format_global, format_reports, format_snapshot};
