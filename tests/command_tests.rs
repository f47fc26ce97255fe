use gas_ledger::commands::{
    execute_analyze, execute_global, execute_init, execute_reconcile, execute_reports,
    execute_set_fee, execute_stats, execute_withdraw, AdminArgs, AnalyzeArgs, InitArgs, QueryArgs,
    ReconcileArgs,
};
use gas_ledger::output::read_state;
use gas_ledger::store::CallerId;
use gas_ledger::utils::error::LedgerError;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn init(dir: &TempDir, fee: u64) -> PathBuf {
    let state_path = dir.path().join("ledger.json");
    execute_init(InitArgs {
        state_path: state_path.clone(),
        owner: "admin".to_string(),
        fee,
        force: false,
    })
    .unwrap();
    state_path
}

fn analyze_args(state_path: &Path, payment: u64) -> AnalyzeArgs {
    AnalyzeArgs {
        state_path: state_path.to_path_buf(),
        caller: "alice".to_string(),
        target: "0xtarget".to_string(),
        original_gas: 1000,
        functions: (0..6).map(|i| format!("f{}()", i)).collect(),
        payment,
    }
}

#[test]
fn test_analyze_reconcile_stats_flow() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 100);

    let index = execute_analyze(analyze_args(&state_path, 100)).unwrap();
    assert_eq!(index, 0);

    execute_reconcile(ReconcileArgs {
        state_path: state_path.clone(),
        caller: "alice".to_string(),
        index: 0,
        actual_gas: 800,
    })
    .unwrap();

    let stats = execute_stats(QueryArgs {
        state_path: state_path.clone(),
        caller: "alice".to_string(),
        json: true,
    })
    .unwrap();
    assert_eq!(stats.total_gas_saved, 200);
    assert_eq!(stats.efficiency_percent, 20);

    let global = execute_global(&state_path, false).unwrap();
    assert_eq!(global.total_optimizations, 1);
    assert_eq!(global.fee_balance, 100);

    let count = execute_reports(QueryArgs {
        state_path,
        caller: "alice".to_string(),
        json: false,
    })
    .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_rejected_analysis_does_not_touch_state_file() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 100);
    let before = std::fs::read_to_string(&state_path).unwrap();

    assert!(execute_analyze(analyze_args(&state_path, 50)).is_err());

    assert_eq!(std::fs::read_to_string(&state_path).unwrap(), before);
}

#[test]
fn test_rejected_reconcile_does_not_touch_state_file() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 0);
    execute_analyze(analyze_args(&state_path, 0)).unwrap();
    let before = std::fs::read_to_string(&state_path).unwrap();

    let result = execute_reconcile(ReconcileArgs {
        state_path: state_path.clone(),
        caller: "alice".to_string(),
        index: 0,
        actual_gas: 1000,
    });

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&state_path).unwrap(), before);
}

#[test]
fn test_init_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 0);

    let again = execute_init(InitArgs {
        state_path: state_path.clone(),
        owner: "admin".to_string(),
        fee: 5,
        force: false,
    });
    assert!(again.is_err());

    execute_init(InitArgs {
        state_path: state_path.clone(),
        owner: "admin".to_string(),
        fee: 5,
        force: true,
    })
    .unwrap();

    let ledger = read_state(&state_path).unwrap();
    assert_eq!(ledger.owner(), &CallerId::new("admin"));
}

#[test]
fn test_commands_require_state_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    assert!(execute_analyze(analyze_args(&missing, 0)).is_err());
    assert!(execute_global(&missing, false).is_err());
}

#[test]
fn test_owner_commands() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 10);
    execute_analyze(analyze_args(&state_path, 10)).unwrap();

    let not_owner = AdminArgs {
        state_path: state_path.clone(),
        caller: "alice".to_string(),
    };
    assert!(execute_set_fee(not_owner.clone(), 1).is_err());
    assert!(execute_withdraw(not_owner).is_err());

    let owner = AdminArgs {
        state_path: state_path.clone(),
        caller: "admin".to_string(),
    };
    execute_set_fee(owner.clone(), 1).unwrap();
    assert_eq!(execute_withdraw(owner).unwrap(), 10);

    let global = execute_global(&state_path, true).unwrap();
    assert_eq!(global.analysis_fee, 1);
    assert_eq!(global.fee_balance, 0);
}

#[test]
fn test_underpaid_malformed_analysis_reports_payment_first() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 100);
    let args = AnalyzeArgs {
        target: " ".to_string(),
        functions: vec![],
        ..analyze_args(&state_path, 10)
    };

    let err = execute_analyze(args).unwrap_err();

    assert_eq!(
        err.downcast_ref::<LedgerError>(),
        Some(&LedgerError::PaymentRequired {
            required: 100,
            provided: 10
        })
    );
}

#[test]
fn test_paid_analysis_of_zero_address_is_invalid_input() {
    let dir = TempDir::new().unwrap();
    let state_path = init(&dir, 0);
    let args = AnalyzeArgs {
        target: "0x0000000000000000000000000000000000000000".to_string(),
        ..analyze_args(&state_path, 0)
    };

    let err = execute_analyze(args).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<LedgerError>(),
        Some(LedgerError::InvalidInput(_))
    ));
}
