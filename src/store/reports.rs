//! Per-caller report storage and the report lifecycle.
//!
//! Each caller owns an append-only list of reports plus a running total
//! of reconciled savings. Indices into a caller's list never change.
//!
//! Lifecycle of a single report:
//! `Created --reconcile(ok)--> Reconciled` (terminal). A failed
//! reconcile leaves the report, the caller totals and the global counter
//! exactly as they were.

use super::report::{AnalysisRequest, CallerId, OptimizationReport};
use crate::estimator::estimate;
use crate::events::{EventSink, LedgerEvent};
use crate::recommend::recommend;
use crate::utils::error::LedgerError;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// State owned by one caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerState {
    reports: Vec<OptimizationReport>,
    total_gas_saved: u64,
}

impl CallerState {
    pub fn reports(&self) -> &[OptimizationReport] {
        &self.reports
    }

    /// Sum of savings from successful reconciliations only
    pub fn total_gas_saved(&self) -> u64 {
        self.total_gas_saved
    }
}

/// Keyed collection of caller report histories
///
/// **Public** - the only component allowed to mutate reports and counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStore {
    callers: BTreeMap<CallerId, CallerState>,
    total_optimizations: u64,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a report stamped with the current time
    ///
    /// See [`ReportStore::create_report_at`].
    pub fn create_report(
        &mut self,
        caller: &CallerId,
        request: AnalysisRequest,
        sink: &mut dyn EventSink,
    ) -> Result<usize, LedgerError> {
        self.create_report_at(caller, request, Utc::now(), sink)
    }

    /// Build and append a new report for `caller`
    ///
    /// **Public** - main entry point for report creation
    ///
    /// # Arguments
    /// * `caller` - Identity the report is stored under
    /// * `request` - Target contract, original gas and function signatures
    /// * `created_at` - Creation timestamp recorded on the report
    /// * `sink` - Receives `AnalysisCompleted` then `ReportGenerated`
    ///
    /// # Returns
    /// 0-based index of the new report in the caller's list
    ///
    /// # Errors
    /// * `LedgerError::InvalidInput` - null caller or target, zero gas,
    ///   or no function signatures
    pub fn create_report_at(
        &mut self,
        caller: &CallerId,
        request: AnalysisRequest,
        created_at: DateTime<Utc>,
        sink: &mut dyn EventSink,
    ) -> Result<usize, LedgerError> {
        validate_request(caller, &request)?;

        let function_count = request.function_count();
        let estimated = estimate(request.original_gas_used, function_count);

        debug!(
            "Estimated {} -> {} gas for {} ({} functions)",
            request.original_gas_used, estimated, request.target_contract, function_count
        );

        let report = OptimizationReport::new(
            request.target_contract.clone(),
            request.original_gas_used,
            estimated,
            created_at,
            recommend(function_count),
        );
        let gas_saved = report.gas_saved();

        let state = self.callers.entry(caller.clone()).or_default();
        state.reports.push(report);
        let index = state.reports.len() - 1;

        info!(
            "Created report {} for caller {} (target {})",
            index, caller, request.target_contract
        );

        sink.emit(LedgerEvent::AnalysisCompleted {
            caller: caller.clone(),
            target_contract: request.target_contract.clone(),
            original_gas_used: request.original_gas_used,
        });
        sink.emit(LedgerEvent::ReportGenerated {
            target_contract: request.target_contract,
            gas_saved,
            created_at,
        });

        Ok(index)
    }

    /// Replace a report's estimate with a measured value
    ///
    /// **Public** - the only transition a report can take
    ///
    /// # Arguments
    /// * `caller` - Owner of the report
    /// * `index` - Position in the caller's report list
    /// * `actual_optimized_gas` - Measured gas after optimization
    ///
    /// # Errors
    /// * `LedgerError::OutOfRange` - no report at `index`
    /// * `LedgerError::InvalidInput` - `actual_optimized_gas` is zero
    /// * `LedgerError::NoSavings` - actual is not below the original gas
    /// * `LedgerError::AlreadyReconciled` - report was closed earlier
    pub fn reconcile(
        &mut self,
        caller: &CallerId,
        index: usize,
        actual_optimized_gas: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        let len = self.reports(caller).len();
        let state = match self.callers.get_mut(caller) {
            Some(state) if index < len => state,
            _ => return Err(LedgerError::OutOfRange { index, len }),
        };

        if actual_optimized_gas == 0 {
            return Err(LedgerError::InvalidInput(
                "actual optimized gas must be greater than 0".to_string(),
            ));
        }

        let report = &mut state.reports[index];

        // Savings are checked before the reconciled flag so a non-improving
        // figure is always reported as such, even on a closed report.
        if actual_optimized_gas >= report.original_gas_used() {
            warn!(
                "Rejected reconcile of report {} for {}: {} >= {}",
                index,
                caller,
                actual_optimized_gas,
                report.original_gas_used()
            );
            return Err(LedgerError::NoSavings {
                actual: actual_optimized_gas,
                original: report.original_gas_used(),
            });
        }

        if report.is_reconciled() {
            warn!("Rejected reconcile of report {} for {}: already reconciled", index, caller);
            return Err(LedgerError::AlreadyReconciled(index));
        }

        let saved = report.apply_reconciliation(actual_optimized_gas);
        let event = LedgerEvent::OptimizationApplied {
            target_contract: report.target_contract().clone(),
            original_gas_used: report.original_gas_used(),
            actual_optimized_gas,
        };

        state.total_gas_saved = state.total_gas_saved.saturating_add(saved);
        self.total_optimizations += 1;

        info!(
            "Reconciled report {} for caller {}: saved {} gas (caller total {})",
            index, caller, saved, state.total_gas_saved
        );

        sink.emit(event);

        Ok(())
    }

    /// All reports for a caller, oldest first (empty for unknown callers)
    pub fn reports(&self, caller: &CallerId) -> &[OptimizationReport] {
        self.callers
            .get(caller)
            .map(|state| state.reports())
            .unwrap_or(&[])
    }

    /// A single report by index
    pub fn report(&self, caller: &CallerId, index: usize) -> Result<&OptimizationReport, LedgerError> {
        let reports = self.reports(caller);
        reports.get(index).ok_or(LedgerError::OutOfRange {
            index,
            len: reports.len(),
        })
    }

    /// Running total of reconciled savings for a caller
    pub fn total_gas_saved(&self, caller: &CallerId) -> u64 {
        self.callers
            .get(caller)
            .map(|state| state.total_gas_saved())
            .unwrap_or(0)
    }

    /// Number of successful reconciliations across every caller
    pub fn total_optimizations(&self) -> u64 {
        self.total_optimizations
    }

    pub fn caller_count(&self) -> usize {
        self.callers.len()
    }

    pub fn report_count(&self) -> usize {
        self.callers.values().map(|state| state.reports.len()).sum()
    }

    /// Verify that reports and counters agree
    ///
    /// **Public** - run on state loaded from outside, e.g. a state file
    ///
    /// # Errors
    /// A description of the first inconsistency found
    pub fn check_consistency(&self) -> Result<(), String> {
        let mut reconciled_total: u64 = 0;

        for (caller, state) in &self.callers {
            let mut caller_saved: u64 = 0;

            for (index, report) in state.reports.iter().enumerate() {
                let original = report.original_gas_used();
                let optimized = report.optimized_gas_used();

                if original == 0 {
                    return Err(format!("{} report {}: original gas is 0", caller, index));
                }

                if report.is_reconciled() {
                    if optimized >= original {
                        return Err(format!(
                            "{} report {}: reconciled at {} but original is {}",
                            caller, index, optimized, original
                        ));
                    }
                    caller_saved = caller_saved.saturating_add(original - optimized);
                    reconciled_total += 1;
                }

                if report.gas_saved() != original.saturating_sub(optimized) {
                    return Err(format!(
                        "{} report {}: gas saved {} does not match {} - {}",
                        caller,
                        index,
                        report.gas_saved(),
                        original,
                        optimized
                    ));
                }
            }

            if caller_saved != state.total_gas_saved {
                return Err(format!(
                    "{}: total gas saved {} but reconciled reports sum to {}",
                    caller, state.total_gas_saved, caller_saved
                ));
            }
        }

        if reconciled_total != self.total_optimizations {
            return Err(format!(
                "total optimizations {} but {} reports are reconciled",
                self.total_optimizations, reconciled_total
            ));
        }

        Ok(())
    }
}

/// Check creation preconditions
///
/// **Private** - runs before the store is touched
fn validate_request(caller: &CallerId, request: &AnalysisRequest) -> Result<(), LedgerError> {
    if caller.is_null() {
        return Err(LedgerError::InvalidInput("caller identity is empty".to_string()));
    }

    if request.target_contract.is_null() {
        return Err(LedgerError::InvalidInput(
            "target contract is null".to_string(),
        ));
    }

    if request.original_gas_used == 0 {
        return Err(LedgerError::InvalidInput(
            "original gas used must be greater than 0".to_string(),
        ));
    }

    if request.function_signatures.is_empty() {
        return Err(LedgerError::InvalidInput(
            "at least one function signature is required".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventLog;

    fn signatures(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("fn_{}()", i)).collect()
    }

    #[test]
    fn test_create_report_appends_and_returns_index() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();
        let alice = CallerId::new("alice");

        let first = store
            .create_report(&alice, AnalysisRequest::new("0xaaa", 1000, signatures(6)), &mut log)
            .unwrap();
        let second = store
            .create_report(&alice, AnalysisRequest::new("0xbbb", 500, signatures(1)), &mut log)
            .unwrap();

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(store.reports(&alice).len(), 2);
        assert_eq!(store.total_gas_saved(&alice), 0);
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn test_validate_request_rejections() {
        let alice = CallerId::new("alice");

        let cases = vec![
            (CallerId::new(""), AnalysisRequest::new("0xaaa", 1, signatures(1))),
            (alice.clone(), AnalysisRequest::new("", 1, signatures(1))),
            (alice.clone(), AnalysisRequest::new("0x0000", 1, signatures(1))),
            (alice.clone(), AnalysisRequest::new("0xaaa", 0, signatures(1))),
            (alice.clone(), AnalysisRequest::new("0xaaa", 1, vec![])),
        ];

        for (caller, request) in cases {
            assert!(matches!(
                validate_request(&caller, &request),
                Err(LedgerError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_reconcile_unknown_caller_is_out_of_range() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();

        let result = store.reconcile(&CallerId::new("nobody"), 0, 10, &mut log);

        assert_eq!(result, Err(LedgerError::OutOfRange { index: 0, len: 0 }));
        assert!(log.is_empty());
    }

    #[test]
    fn test_reconcile_zero_actual_is_invalid() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();
        let alice = CallerId::new("alice");
        store
            .create_report(&alice, AnalysisRequest::new("0xaaa", 1000, signatures(2)), &mut log)
            .unwrap();

        let before = store.clone();
        let result = store.reconcile(&alice, 0, 0, &mut log);

        assert!(matches!(result, Err(LedgerError::InvalidInput(_))));
        assert_eq!(store, before);
    }

    #[test]
    fn test_consistency_holds_after_operations() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();
        let alice = CallerId::new("alice");
        for gas in [1000, 2000] {
            store
                .create_report(&alice, AnalysisRequest::new("0xaaa", gas, signatures(7)), &mut log)
                .unwrap();
        }
        store.reconcile(&alice, 1, 1500, &mut log).unwrap();

        assert_eq!(store.check_consistency(), Ok(()));
    }

    #[test]
    fn test_consistency_detects_counter_drift() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();
        let alice = CallerId::new("alice");
        store
            .create_report(&alice, AnalysisRequest::new("0xaaa", 1000, signatures(1)), &mut log)
            .unwrap();
        store.reconcile(&alice, 0, 600, &mut log).unwrap();

        let mut drifted = store.clone();
        drifted.total_optimizations = 2;
        assert!(drifted.check_consistency().is_err());

        let mut drifted = store.clone();
        if let Some(state) = drifted.callers.get_mut(&alice) {
            state.total_gas_saved = 1;
        }
        assert!(drifted.check_consistency().is_err());
    }

    #[test]
    fn test_report_lookup() {
        let mut store = ReportStore::new();
        let mut log = EventLog::new();
        let alice = CallerId::new("alice");
        store
            .create_report(&alice, AnalysisRequest::new("0xaaa", 1000, signatures(2)), &mut log)
            .unwrap();

        assert_eq!(store.report(&alice, 0).unwrap().original_gas_used(), 1000);
        assert_eq!(
            store.report(&alice, 3).unwrap_err(),
            LedgerError::OutOfRange { index: 3, len: 1 }
        );
    }
}
