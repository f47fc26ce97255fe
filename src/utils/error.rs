//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while operating on the ledger
///
/// Every variant is detected before any state is written, so a rejected
/// operation leaves the ledger untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Payment required: fee is {required}, got {provided}")]
    PaymentRequired { required: u64, provided: u64 },

    #[error("Report index {index} out of range (caller has {len} reports)")]
    OutOfRange { index: usize, len: usize },

    #[error("Report {0} is already reconciled")]
    AlreadyReconciled(usize),

    #[error("No savings: actual gas {actual} is not below original gas {original}")]
    NoSavings { actual: u64, original: u64 },

    #[error("Caller {0} is not the ledger owner")]
    Unauthorized(String),
}

/// Errors that can occur while reading or writing the state file
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to write file: {0}")]
    WriteFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid state path: {0}")]
    InvalidPath(String),

    #[error("Unsupported state version: {0}")]
    UnsupportedVersion(String),

    #[error("Inconsistent ledger state: {0}")]
    CorruptState(String),
}
