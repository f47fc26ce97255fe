//! Report records and the identities they are keyed by.

use crate::utils::config::RECOMMENDATION_COUNT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the actor on whose behalf reports are stored
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank identity stands for "no caller"
    pub fn is_null(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Opaque identity of an analyzed contract
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for a blank identity or the all-zero address (`0x000...0`)
    pub fn is_null(&self) -> bool {
        let id = self.0.trim();
        if id.is_empty() {
            return true;
        }

        match id.strip_prefix("0x") {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c == '0'),
            None => false,
        }
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContractId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ContractId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A paid request to analyze a target contract
///
/// **Public** - built by the CLI and by library users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Contract being analyzed
    pub target_contract: ContractId,

    /// Gas the contract used before any optimization
    pub original_gas_used: u64,

    /// Function signatures exposed by the contract
    pub function_signatures: Vec<String>,
}

impl AnalysisRequest {
    pub fn new(
        target_contract: impl Into<ContractId>,
        original_gas_used: u64,
        function_signatures: Vec<String>,
    ) -> Self {
        Self {
            target_contract: target_contract.into(),
            original_gas_used,
            function_signatures,
        }
    }

    pub fn function_count(&self) -> usize {
        self.function_signatures.len()
    }
}

/// One analysis record
///
/// Fields are read-only from outside the store. The optimized figure and
/// savings change exactly once, when the report is reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    target_contract: ContractId,
    original_gas_used: u64,
    optimized_gas_used: u64,
    gas_saved: u64,
    created_at: DateTime<Utc>,
    recommendations: [String; RECOMMENDATION_COUNT],
    is_reconciled: bool,
}

impl OptimizationReport {
    pub(crate) fn new(
        target_contract: ContractId,
        original_gas_used: u64,
        estimated_gas: u64,
        created_at: DateTime<Utc>,
        recommendations: [String; RECOMMENDATION_COUNT],
    ) -> Self {
        Self {
            target_contract,
            original_gas_used,
            optimized_gas_used: estimated_gas,
            gas_saved: original_gas_used.saturating_sub(estimated_gas),
            created_at,
            recommendations,
            is_reconciled: false,
        }
    }

    /// Replace the estimate with a measured value and close the report.
    ///
    /// Caller must have checked `actual < original_gas_used` and that the
    /// report is still open. Returns the new savings.
    pub(crate) fn apply_reconciliation(&mut self, actual_optimized_gas: u64) -> u64 {
        self.optimized_gas_used = actual_optimized_gas;
        self.gas_saved = self.original_gas_used - actual_optimized_gas;
        self.is_reconciled = true;
        self.gas_saved
    }

    pub fn target_contract(&self) -> &ContractId {
        &self.target_contract
    }

    pub fn original_gas_used(&self) -> u64 {
        self.original_gas_used
    }

    pub fn optimized_gas_used(&self) -> u64 {
        self.optimized_gas_used
    }

    pub fn gas_saved(&self) -> u64 {
        self.gas_saved
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn is_reconciled(&self) -> bool {
        self.is_reconciled
    }
}
