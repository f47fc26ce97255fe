//! JSON state file reader and writer.
//!
//! The whole ledger is written as one pretty-printed document wrapped in a
//! versioned envelope.

use crate::ledger::GasLedger;
use crate::utils::config::STATE_SCHEMA_VERSION;
use crate::utils::error::StorageError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Versioned envelope around the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerState {
    /// Schema version for compatibility checking
    pub version: String,

    /// When the state was last written
    pub saved_at: DateTime<Utc>,

    pub ledger: GasLedger,
}

impl LedgerState {
    pub fn new(ledger: GasLedger) -> Self {
        Self {
            version: STATE_SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
            ledger,
        }
    }
}

/// Write the ledger to a JSON file
///
/// **Public** - main entry point for persistence
///
/// # Arguments
/// * `ledger` - Ledger to persist
/// * `output_path` - Path to the state file
///
/// # Errors
/// * `StorageError::WriteFailed` - I/O error during write
/// * `StorageError::SerializationFailed` - JSON serialization error
/// * `StorageError::InvalidPath` - Path cannot be created or is invalid
pub fn write_state(ledger: &GasLedger, output_path: impl AsRef<Path>) -> Result<(), StorageError> {
    let output_path = output_path.as_ref();

    info!("Writing ledger state to: {}", output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let state = LedgerState::new(ledger.clone());

    // Regular files are replaced atomically so a failed write keeps the
    // previous state. Anything else (pipes, devices) is written in place.
    if !output_path.exists() || output_path.is_file() {
        let dir = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(StorageError::WriteFailed)?;
        write_json(temp.as_file_mut(), &state)?;
        temp.as_file().sync_all().map_err(StorageError::WriteFailed)?;
        temp.persist(output_path)
            .map_err(|e| StorageError::WriteFailed(e.error))?;
    } else {
        let mut file = File::create(output_path).map_err(StorageError::WriteFailed)?;
        write_json(&mut file, &state)?;
    }

    debug!(
        "State written ({} callers, {} reports)",
        ledger.store().caller_count(),
        ledger.store().report_count()
    );

    Ok(())
}

/// Serialize into `file` and flush
///
/// **Private** - the flush must be explicit, a dropped `BufWriter` discards its error
fn write_json(file: &mut File, state: &LedgerState) -> Result<(), StorageError> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, state)?;
    writer.flush().map_err(StorageError::WriteFailed)?;
    Ok(())
}

/// Serialize the ledger to a pretty JSON string
pub fn state_to_string(ledger: &GasLedger) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(&LedgerState::new(ledger.clone()))?)
}

/// Read a ledger from a JSON state file
///
/// **Public** - counterpart of `write_state`
///
/// # Errors
/// * `StorageError::ReadFailed` - File read error
/// * `StorageError::SerializationFailed` - JSON parse error
/// * `StorageError::UnsupportedVersion` - Major version differs from ours
/// * `StorageError::CorruptState` - Reports and counters disagree
pub fn read_state(input_path: impl AsRef<Path>) -> Result<GasLedger, StorageError> {
    let input_path = input_path.as_ref();

    debug!("Reading ledger state from: {}", input_path.display());

    let file = File::open(input_path).map_err(StorageError::ReadFailed)?;
    let state: LedgerState = serde_json::from_reader(file)?;

    if major_version(&state.version) != major_version(STATE_SCHEMA_VERSION) {
        return Err(StorageError::UnsupportedVersion(state.version));
    }

    state
        .ledger
        .store()
        .check_consistency()
        .map_err(StorageError::CorruptState)?;

    debug!("State loaded: version {}, saved {}", state.version, state.saved_at);

    Ok(state.ledger)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), StorageError> {
    if path.as_os_str().is_empty() {
        return Err(StorageError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(StorageError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}
