//! The ledger facade.
//!
//! `GasLedger` puts the fee gate and owner check in front of the report
//! store and keeps custody of collected fees. It is also the unit that is
//! persisted to disk.

pub mod shared;

pub use shared::SharedLedger;

use crate::events::EventSink;
use crate::gate::{FeeGate, FlatFee, Owner};
use crate::stats::{self, StatsSnapshot};
use crate::store::{AnalysisRequest, CallerId, OptimizationReport, ReportStore};
use crate::utils::error::LedgerError;
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Complete ledger state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasLedger {
    owner: Owner,
    fee: FlatFee,
    balance: u64,
    store: ReportStore,
}

impl GasLedger {
    /// Create an empty ledger
    ///
    /// # Arguments
    /// * `owner` - Identity allowed to change the fee and withdraw
    /// * `analysis_fee` - Fee charged per analysis request
    pub fn new(owner: CallerId, analysis_fee: u64) -> Self {
        Self {
            owner: Owner::new(owner),
            fee: FlatFee::new(analysis_fee),
            balance: 0,
            store: ReportStore::new(),
        }
    }

    /// Run a paid analysis request
    ///
    /// **Public** - main entry point for report creation
    ///
    /// The payment is checked before anything else. It is credited to the
    /// fee balance only if the report is created.
    ///
    /// # Returns
    /// Index of the new report in the caller's list
    ///
    /// # Errors
    /// * `LedgerError::PaymentRequired` - payment below the current fee
    /// * `LedgerError::InvalidInput` - malformed request
    pub fn analyze(
        &mut self,
        caller: &CallerId,
        request: AnalysisRequest,
        payment: u64,
        sink: &mut dyn EventSink,
    ) -> Result<usize, LedgerError> {
        if let Err(e) = self.fee.check(payment) {
            warn!("Rejected analysis for {}: {}", caller, e);
            return Err(e);
        }

        let index = self.store.create_report(caller, request, sink)?;
        self.balance = self.balance.saturating_add(payment);

        Ok(index)
    }

    /// Reconcile one of the caller's reports
    ///
    /// See [`ReportStore::reconcile`].
    pub fn reconcile(
        &mut self,
        caller: &CallerId,
        index: usize,
        actual_optimized_gas: u64,
        sink: &mut dyn EventSink,
    ) -> Result<(), LedgerError> {
        self.store.reconcile(caller, index, actual_optimized_gas, sink)
    }

    pub fn snapshot(&self, caller: &CallerId) -> Result<StatsSnapshot, LedgerError> {
        stats::snapshot(&self.store, caller)
    }

    pub fn reports(&self, caller: &CallerId) -> &[OptimizationReport] {
        self.store.reports(caller)
    }

    /// Change the analysis fee (owner only)
    pub fn update_fee(&mut self, caller: &CallerId, new_fee: u64) -> Result<(), LedgerError> {
        self.owner.ensure(caller)?;

        info!("Analysis fee changed from {} to {}", self.fee.required_fee(), new_fee);
        self.fee.set_fee(new_fee);

        Ok(())
    }

    /// Empty the fee balance (owner only)
    ///
    /// # Returns
    /// The amount withdrawn
    pub fn withdraw_fees(&mut self, caller: &CallerId) -> Result<u64, LedgerError> {
        self.owner.ensure(caller)?;

        let amount = std::mem::take(&mut self.balance);
        info!("Withdrew {} in collected fees", amount);

        Ok(amount)
    }

    /// Fees collected and not yet withdrawn
    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn owner(&self) -> &CallerId {
        self.owner.id()
    }

    pub fn fee_gate(&self) -> &FlatFee {
        &self.fee
    }

    pub fn store(&self) -> &ReportStore {
        &self.store
    }
}
