//! Read-only query commands: stats, reports and global.

use super::models::QueryArgs;
use super::utils::{load_ledger, require_identity};
use crate::output::{format_global, format_reports, format_snapshot};
use crate::stats::{global_stats, GlobalStats, StatsSnapshot};
use crate::store::CallerId;
use anyhow::{Context, Result};
use std::path::Path;

/// Print a caller's efficiency statistics
pub fn execute_stats(args: QueryArgs) -> Result<StatsSnapshot> {
    require_identity(&args.caller, "Caller")?;

    let ledger = load_ledger(&args.state_path)?;
    let caller = CallerId::new(args.caller);
    let stats = ledger.snapshot(&caller)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", format_snapshot(&caller, &stats));
    }

    Ok(stats)
}

/// Print every report a caller owns
///
/// # Returns
/// Number of reports printed
pub fn execute_reports(args: QueryArgs) -> Result<usize> {
    require_identity(&args.caller, "Caller")?;

    let ledger = load_ledger(&args.state_path)?;
    let reports = ledger.reports(&CallerId::new(args.caller));

    if args.json {
        let json = serde_json::to_string_pretty(reports).context("Failed to serialize reports")?;
        println!("{}", json);
    } else {
        println!("{}", format_reports(reports));
    }

    Ok(reports.len())
}

/// Print ledger-wide statistics
pub fn execute_global(state_path: &Path, json: bool) -> Result<GlobalStats> {
    let ledger = load_ledger(state_path)?;
    let stats = global_stats(&ledger);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", format_global(&stats));
    }

    Ok(stats)
}
