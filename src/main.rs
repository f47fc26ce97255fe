//! Gas Ledger CLI
//!
//! Records gas-optimization reports, reconciles them against measured
//! values and prints efficiency statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gas_ledger::commands::{
    execute_analyze, execute_global, execute_init, execute_reconcile, execute_reports,
    execute_set_fee, execute_stats, execute_withdraw, reconcile, AdminArgs, AnalyzeArgs, InitArgs,
    QueryArgs, ReconcileArgs,
};
use gas_ledger::utils::config::{DEFAULT_ANALYSIS_FEE, DEFAULT_STATE_PATH, STATE_SCHEMA_VERSION};

/// Gas Ledger - track gas optimization reports
#[derive(Parser, Debug)]
#[command(name = "gas-ledger")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Path to the ledger state file
    #[arg(short, long, global = true, env = "GAS_LEDGER_STATE", default_value = DEFAULT_STATE_PATH)]
    state: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new ledger state file
    Init {
        /// Owner identity (may change the fee and withdraw)
        #[arg(long)]
        owner: String,

        /// Fee charged per analysis
        #[arg(long, default_value_t = DEFAULT_ANALYSIS_FEE)]
        fee: u64,

        /// Overwrite an existing state file
        #[arg(long)]
        force: bool,
    },

    /// Record a paid analysis of a target contract
    Analyze {
        /// Caller identity
        #[arg(short, long)]
        caller: String,

        /// Target contract identity
        #[arg(short, long)]
        target: String,

        /// Gas used before optimization
        #[arg(short, long)]
        gas: u64,

        /// Function signature (repeat for each function)
        #[arg(short, long = "function", required = true)]
        functions: Vec<String>,

        /// Amount paid for the analysis
        #[arg(short, long, default_value = "0")]
        payment: u64,
    },

    /// Replace a report's estimate with a measured value
    Reconcile {
        /// Caller identity
        #[arg(short, long)]
        caller: String,

        /// Report index
        #[arg(short, long)]
        index: usize,

        /// Measured gas after optimization
        #[arg(short, long)]
        actual: u64,
    },

    /// Show efficiency statistics for a caller
    Stats {
        #[arg(short, long)]
        caller: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// List a caller's reports
    Reports {
        #[arg(short, long)]
        caller: String,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show ledger-wide statistics
    Global {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the analysis fee (owner only)
    SetFee {
        #[arg(short, long)]
        caller: String,

        #[arg(long)]
        fee: u64,
    },

    /// Withdraw collected fees (owner only)
    Withdraw {
        #[arg(short, long)]
        caller: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let state_path = cli.state;

    match cli.command {
        Commands::Init { owner, fee, force } => {
            execute_init(InitArgs {
                state_path,
                owner,
                fee,
                force,
            })?;
        }

        Commands::Analyze {
            caller,
            target,
            gas,
            functions,
            payment,
        } => {
            // The ledger checks payment before the request itself
            execute_analyze(AnalyzeArgs {
                state_path,
                caller,
                target,
                original_gas: gas,
                functions,
                payment,
            })?;
        }

        Commands::Reconcile {
            caller,
            index,
            actual,
        } => {
            let args = ReconcileArgs {
                state_path,
                caller,
                index,
                actual_gas: actual,
            };

            reconcile::validate_args(&args)?;

            execute_reconcile(args)?;
        }

        Commands::Stats { caller, json } => {
            execute_stats(QueryArgs {
                state_path,
                caller,
                json,
            })?;
        }

        Commands::Reports { caller, json } => {
            execute_reports(QueryArgs {
                state_path,
                caller,
                json,
            })?;
        }

        Commands::Global { json } => {
            execute_global(&state_path, json)?;
        }

        Commands::SetFee { caller, fee } => {
            execute_set_fee(AdminArgs { state_path, caller }, fee)?;
        }

        Commands::Withdraw { caller } => {
            execute_withdraw(AdminArgs { state_path, caller })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Gas Ledger v{}", env!("CARGO_PKG_VERSION"));
    println!("State Schema: v{}", STATE_SCHEMA_VERSION);
    println!();
    println!("Tracks gas optimization reports and efficiency statistics.");
}
