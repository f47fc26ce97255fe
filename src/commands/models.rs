use std::path::PathBuf;

/// Arguments for the init command
#[derive(Debug, Clone)]
pub struct InitArgs {
    /// Path to the state file to create
    pub state_path: PathBuf,

    /// Ledger owner identity
    pub owner: String,

    /// Fee charged per analysis
    pub fee: u64,

    /// Overwrite an existing state file
    pub force: bool,
}

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Path to the state file
    pub state_path: PathBuf,

    /// Identity the report is stored under
    pub caller: String,

    /// Contract being analyzed
    pub target: String,

    /// Gas used before optimization
    pub original_gas: u64,

    /// Function signatures of the target contract
    pub functions: Vec<String>,

    /// Amount paid for the analysis
    pub payment: u64,
}

/// Arguments for the reconcile command
#[derive(Debug, Clone)]
pub struct ReconcileArgs {
    pub state_path: PathBuf,
    pub caller: String,

    /// Index of the report to reconcile
    pub index: usize,

    /// Measured gas after optimization
    pub actual_gas: u64,
}

/// Arguments for the read-only stats and reports commands
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub state_path: PathBuf,
    pub caller: String,

    /// Print JSON instead of text
    pub json: bool,
}

/// Arguments for owner-only commands
#[derive(Debug, Clone)]
pub struct AdminArgs {
    pub state_path: PathBuf,
    pub caller: String,
}
