//! Owner commands: init, set-fee and withdraw.

use super::models::{AdminArgs, InitArgs};
use super::utils::{load_ledger, require_identity, save_ledger};
use crate::ledger::GasLedger;
use crate::store::CallerId;
use anyhow::{Context, Result};
use log::info;

/// Create a fresh state file
pub fn execute_init(args: InitArgs) -> Result<()> {
    require_identity(&args.owner, "Owner")?;

    if args.state_path.exists() && !args.force {
        anyhow::bail!(
            "State file {} already exists (use --force to overwrite)",
            args.state_path.display()
        );
    }

    let ledger = GasLedger::new(CallerId::new(args.owner), args.fee);
    save_ledger(&ledger, &args.state_path)?;

    info!(
        "✓ Initialized ledger at {} (owner {}, fee {})",
        args.state_path.display(),
        ledger.owner(),
        args.fee
    );

    Ok(())
}

/// Change the analysis fee
pub fn execute_set_fee(args: AdminArgs, fee: u64) -> Result<()> {
    let mut ledger = load_ledger(&args.state_path)?;

    ledger
        .update_fee(&CallerId::new(args.caller), fee)
        .context("Fee update rejected")?;

    save_ledger(&ledger, &args.state_path)?;
    println!("Analysis fee set to {}", fee);

    Ok(())
}

/// Withdraw collected fees
///
/// # Returns
/// Amount withdrawn
pub fn execute_withdraw(args: AdminArgs) -> Result<u64> {
    let mut ledger = load_ledger(&args.state_path)?;

    let amount = ledger
        .withdraw_fees(&CallerId::new(args.caller))
        .context("Withdrawal rejected")?;

    save_ledger(&ledger, &args.state_path)?;
    println!("Withdrew {}", amount);

    Ok(amount)
}
