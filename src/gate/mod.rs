//! Payment and ownership checks that guard ledger operations.
//!
//! Both are thin: a flat fee compared against the attached payment, and a
//! single owner identity compared against the caller.

use crate::store::CallerId;
use crate::utils::config::DEFAULT_ANALYSIS_FEE;
use crate::utils::error::LedgerError;
use serde::{Deserialize, Serialize};

/// Decides whether a payment covers an analysis request
pub trait FeeGate {
    /// Fee currently charged per request
    fn required_fee(&self) -> u64;

    /// Accept or reject a payment
    fn check(&self, payment: u64) -> Result<(), LedgerError> {
        let required = self.required_fee();
        if payment < required {
            return Err(LedgerError::PaymentRequired {
                required,
                provided: payment,
            });
        }
        Ok(())
    }
}

/// A single fee charged per analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatFee {
    fee: u64,
}

impl FlatFee {
    pub fn new(fee: u64) -> Self {
        Self { fee }
    }

    pub fn set_fee(&mut self, fee: u64) {
        self.fee = fee;
    }
}

impl Default for FlatFee {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYSIS_FEE)
    }
}

impl FeeGate for FlatFee {
    fn required_fee(&self) -> u64 {
        self.fee
    }
}

/// The identity allowed to run administrative operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Owner(CallerId);

impl Owner {
    pub fn new(id: CallerId) -> Self {
        Self(id)
    }

    pub fn id(&self) -> &CallerId {
        &self.0
    }

    /// Fail with `Unauthorized` unless `caller` is the owner
    pub fn ensure(&self, caller: &CallerId) -> Result<(), LedgerError> {
        if caller != &self.0 {
            return Err(LedgerError::Unauthorized(caller.to_string()));
        }
        Ok(())
    }
}
