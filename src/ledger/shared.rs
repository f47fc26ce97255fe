//! Thread-safe handle to a ledger.
//!
//! Every operation takes the single ledger lock and runs to completion
//! before releasing it, so readers only ever see fully applied changes.

use super::GasLedger;
use crate::events::EventSink;
use crate::stats::{self, GlobalStats, StatsSnapshot};
use crate::store::{AnalysisRequest, CallerId, OptimizationReport};
use crate::utils::error::LedgerError;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-protected ledger
#[derive(Debug, Clone)]
pub struct SharedLedger {
    inner: Arc<Mutex<GasLedger>>,
}

impl SharedLedger {
    pub fn new(ledger: GasLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn analyze(
        &self,
        caller: &CallerId,
        request: AnalysisRequest,
        payment: u64,
        sink: &mut dyn EventSink,
    ) -> Result<usize, LedgerError> {
        self.inner.lock().analyze(caller, request, payment, sink)
    }

    pub fn reconcile(
        &self,
        caller: &CallerId,
        index: usize,
        actual_optimized_gas: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        self.inner
            .lock()
            .reconcile(caller, index, actual_optimized_gas, sink)
    }

    pub fn snapshot(&self, caller: &CallerId) -> Result<StatsSnapshot, LedgerError> {
        self.inner.lock().snapshot(caller)
    }

    pub fn global_stats(&self) -> GlobalStats {
        stats::global_stats(&self.inner.lock())
    }

    /// Copy of a caller's reports
    pub fn reports(&self, caller: &CallerId) -> Vec<OptimizationReport> {
        self.inner.lock().reports(caller).to_vec()
    }

    /// Copy of the whole ledger, e.g. for persisting
    pub fn to_ledger(&self) -> GasLedger {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventLog;
    use std::thread;

    #[test]
    fn test_concurrent_reconciles_apply_once() {
        let shared = SharedLedger::new(GasLedger::new(CallerId::new("admin"), 0));
        let alice = CallerId::new("alice");
        let mut log = EventLog::new();
        shared
            .analyze(&alice, AnalysisRequest::new("0xaaa", 1000, vec!["f()".into()]), 0, &mut log)
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                let alice = alice.clone();
                thread::spawn(move || {
                    let mut log = EventLog::new();
                    shared.reconcile(&alice, 0, 700, &mut log).is_ok()
                })
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        assert_eq!(shared.global_stats().total_optimizations, 1);
        assert_eq!(shared.snapshot(&alice).unwrap().total_gas_saved, 300);
    }

    #[test]
    fn test_concurrent_analyses_get_distinct_indices() {
        let shared = SharedLedger::new(GasLedger::new(CallerId::new("admin"), 0));

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let mut log = EventLog::new();
                    shared
                        .analyze(
                            &CallerId::new("alice"),
                            AnalysisRequest::new("0xaaa", 100 + i, vec!["f()".into()]),
                            0,
                            &mut log,
                        )
                        .unwrap()
                })
            })
            .collect();

        let mut indices: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        indices.sort_unstable();

        assert_eq!(indices, (0..10).collect::<Vec<_>>());
        assert_eq!(shared.reports(&CallerId::new("alice")).len(), 10);
    }
}
