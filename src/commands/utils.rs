//! Helpers shared by the command implementations.

use crate::events::{EventLog, LedgerEvent};
use crate::ledger::GasLedger;
use crate::output::{read_state, write_state};
use anyhow::{Context, Result};
use std::path::Path;

/// Load the ledger from its state file
pub fn load_ledger(state_path: &Path) -> Result<GasLedger> {
    if !state_path.exists() {
        anyhow::bail!(
            "State file {} not found (run `gas-ledger init` first)",
            state_path.display()
        );
    }

    read_state(state_path)
        .with_context(|| format!("Failed to read ledger state from {}", state_path.display()))
}

/// Persist the ledger to its state file
pub fn save_ledger(ledger: &GasLedger, state_path: &Path) -> Result<()> {
    write_state(ledger, state_path)
        .with_context(|| format!("Failed to write ledger state to {}", state_path.display()))
}

/// Print emitted events as JSON lines
pub fn print_events(log: &EventLog) -> Result<()> {
    for event in log.events() {
        println!("{}", event_line(event)?);
    }
    Ok(())
}

fn event_line(event: &LedgerEvent) -> Result<String> {
    serde_json::to_string(event).context("Failed to serialize event")
}

/// Reject blank identities before touching the state file
pub fn require_identity(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }
    Ok(())
}
