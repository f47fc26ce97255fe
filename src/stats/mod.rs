//! Read-only efficiency statistics.
//!
//! Per-caller snapshots reduce a caller's report history together with
//! the caller's running saved-gas counter. Global statistics summarize
//! the whole ledger.

use crate::gate::FeeGate;
use crate::ledger::GasLedger;
use crate::store::{CallerId, ReportStore};
use crate::utils::error::LedgerError;
use serde::{Deserialize, Serialize};

/// Efficiency figures for one caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Reports ever created by the caller
    pub total_reports: usize,

    /// Reports that have been reconciled
    pub reconciled_count: usize,

    /// Running saved-gas counter (reconciled savings only)
    pub total_gas_saved: u64,

    /// `total_gas_saved / reconciled_count`, floored
    pub average_gas_saved_per_reconciled: u64,

    /// `total_gas_saved * 100 / total_original_gas_analyzed`, floored
    pub efficiency_percent: u64,

    /// Original gas summed over every report, reconciled or not
    pub total_original_gas_analyzed: u64,
}

impl StatsSnapshot {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Reports: {} | Reconciled: {} | Saved: {} gas | Avg: {} | Efficiency: {}%",
            self.total_reports,
            self.reconciled_count,
            self.total_gas_saved,
            self.average_gas_saved_per_reconciled,
            self.efficiency_percent
        )
    }
}

/// Compute a caller's statistics
///
/// **Public** - main entry point for per-caller aggregation
///
/// The numerator of both derived figures is the caller's lifetime counter,
/// while the efficiency denominator also counts unreconciled reports. The
/// arithmetic is kept as-is because it is what callers have always seen.
///
/// # Errors
/// * `LedgerError::InvalidInput` - caller identity is blank
pub fn snapshot(store: &ReportStore, caller: &CallerId) -> Result<StatsSnapshot, LedgerError> {
    if caller.is_null() {
        return Err(LedgerError::InvalidInput("caller identity is empty".to_string()));
    }

    let mut total_original_gas_analyzed: u64 = 0;
    let mut reconciled_count = 0;

    for report in store.reports(caller) {
        total_original_gas_analyzed =
            total_original_gas_analyzed.saturating_add(report.original_gas_used());
        if report.is_reconciled() {
            reconciled_count += 1;
        }
    }

    let total_gas_saved = store.total_gas_saved(caller);

    let average_gas_saved_per_reconciled = if reconciled_count > 0 {
        total_gas_saved / reconciled_count as u64
    } else {
        0
    };

    let efficiency_percent = if total_original_gas_analyzed > 0 {
        (total_gas_saved as u128 * 100 / total_original_gas_analyzed as u128) as u64
    } else {
        0
    };

    Ok(StatsSnapshot {
        total_reports: store.reports(caller).len(),
        reconciled_count,
        total_gas_saved,
        average_gas_saved_per_reconciled,
        efficiency_percent,
        total_original_gas_analyzed,
    })
}

/// Ledger-wide statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Successful reconciliations across every caller
    pub total_optimizations: u64,

    /// Callers with at least one report
    pub total_callers: usize,

    /// Reports across every caller
    pub total_reports: usize,

    /// Fees collected and not yet withdrawn
    pub fee_balance: u64,

    /// Fee currently charged per analysis
    pub analysis_fee: u64,
}

/// Summarize the whole ledger
pub fn global_stats(ledger: &GasLedger) -> GlobalStats {
    let store = ledger.store();

    GlobalStats {
        total_optimizations: store.total_optimizations(),
        total_callers: store.caller_count(),
        total_reports: store.report_count(),
        fee_balance: ledger.balance(),
        analysis_fee: ledger.fee_gate().required_fee(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventLog;
    use crate::store::AnalysisRequest;

    #[test]
    fn test_snapshot_empty_caller_is_all_zero() {
        let store = ReportStore::new();
        let stats = snapshot(&store, &CallerId::new("alice")).unwrap();
        assert_eq!(stats, StatsSnapshot::default());
    }

    #[test]
    fn test_snapshot_rejects_blank_caller() {
        let store = ReportStore::new();
        assert!(matches!(
            snapshot(&store, &CallerId::new(" ")),
            Err(LedgerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unreconciled_reports_count_toward_denominator_only() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();
        let alice = CallerId::new("alice");

        for gas in [1000, 3000] {
            store
                .create_report(&alice, AnalysisRequest::new("0xaaa", gas, vec!["f()".into()]), &mut log)
                .unwrap();
        }
        store.reconcile(&alice, 0, 600, &mut log).unwrap();

        let stats = snapshot(&store, &alice).unwrap();

        assert_eq!(stats.total_reports, 2);
        assert_eq!(stats.reconciled_count, 1);
        assert_eq!(stats.total_gas_saved, 400);
        assert_eq!(stats.average_gas_saved_per_reconciled, 400);
        assert_eq!(stats.total_original_gas_analyzed, 4000);
        assert_eq!(stats.efficiency_percent, 10);
    }
}
