//! Reconcile command implementation.

use super::models::ReconcileArgs;
use super::utils::{load_ledger, print_events, require_identity, save_ledger};
use crate::events::EventLog;
use crate::store::CallerId;
use anyhow::{Context, Result};
use log::info;

/// Execute the reconcile command
///
/// **Public** - main entry point called from main.rs
///
/// The state file is only rewritten when the reconciliation succeeds.
pub fn execute_reconcile(args: ReconcileArgs) -> Result<()> {
    info!(
        "Reconciling report {} for caller {} with {} gas",
        args.index, args.caller, args.actual_gas
    );

    let mut ledger = load_ledger(&args.state_path)?;
    let caller = CallerId::new(args.caller);

    let mut events = EventLog::new();
    ledger
        .reconcile(&caller, args.index, args.actual_gas, &mut events)
        .with_context(|| format!("Reconciliation of report {} rejected", args.index))?;

    save_ledger(&ledger, &args.state_path)?;

    info!(
        "✓ Report {} reconciled, caller total saved: {}",
        args.index,
        ledger.store().total_gas_saved(&caller)
    );

    print_events(&events)?;

    Ok(())
}

/// Validate reconcile arguments
pub fn validate_args(args: &ReconcileArgs) -> Result<()> {
    require_identity(&args.caller, "Caller")?;

    if args.actual_gas == 0 {
        anyhow::bail!("Actual gas must be greater than 0");
    }

    Ok(())
}
