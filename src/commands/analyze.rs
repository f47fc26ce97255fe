//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads the ledger state
//! 2. Runs the paid analysis request
//! 3. Prints the emitted events
//! 4. Writes the state back

use super::models::AnalyzeArgs;
use super::utils::{load_ledger, print_events, save_ledger};
use crate::events::EventLog;
use crate::store::{AnalysisRequest, CallerId};
use anyhow::{Context, Result};
use log::info;

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Index of the created report
///
/// The request is not pre-validated here: the ledger checks the payment
/// first and only then the request itself.
///
/// # Errors
/// * Missing or unreadable state file
/// * Payment below the current fee
/// * Invalid request
pub fn execute_analyze(args: AnalyzeArgs) -> Result<usize> {
    info!("Analyzing {} for caller {}", args.target, args.caller);

    let mut ledger = load_ledger(&args.state_path)?;
    let caller = CallerId::new(args.caller);
    let request = AnalysisRequest::new(args.target, args.original_gas, args.functions);

    let mut events = EventLog::new();
    let index = ledger
        .analyze(&caller, request, args.payment, &mut events)
        .context("Analysis rejected")?;

    save_ledger(&ledger, &args.state_path)?;

    let report = &ledger.reports(&caller)[index];
    info!(
        "✓ Report {} created: {} -> {} gas (estimated saving {})",
        index,
        report.original_gas_used(),
        report.optimized_gas_used(),
        report.gas_saved()
    );

    print_events(&events)?;

    Ok(index)
}
