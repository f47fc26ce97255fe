//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands load the ledger state, run one ledger operation and save it back.

pub mod admin;
pub mod analyze;
pub mod models;
pub mod reconcile;
pub mod stats;
pub mod utils;

// Re-export main command functions
pub use admin::{execute_init, execute_set_fee, execute_withdraw};
pub use analyze::execute_analyze;
pub use models::{AdminArgs, AnalyzeArgs, InitArgs, QueryArgs, ReconcileArgs};
pub use reconcile::execute_reconcile;
pub use stats::{execute_global, execute_reports, execute_stats};
