//! Report storage.
//!
//! This module holds:
//! - Report records and caller/contract identities
//! - The per-caller report store and its lifecycle rules

pub mod report;
pub mod reports;

// Re-export main types
pub use report::{AnalysisRequest, CallerId, ContractId, OptimizationReport};
pub use reports::{CallerState, ReportStore};
