//! Plain-text summaries printed by the CLI.

use crate::stats::{GlobalStats, StatsSnapshot};
use crate::store::{CallerId, OptimizationReport};

/// Render a caller's statistics as a text block
pub fn format_snapshot(caller: &CallerId, stats: &StatsSnapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!("Caller:               {}\n", caller));
    out.push_str(&format!("Reports:              {}\n", stats.total_reports));
    out.push_str(&format!("Reconciled:           {}\n", stats.reconciled_count));
    out.push_str(&format!("Gas Analyzed:         {}\n", stats.total_original_gas_analyzed));
    out.push_str(&format!("Gas Saved:            {}\n", stats.total_gas_saved));
    out.push_str(&format!(
        "Avg Saved/Reconciled: {}\n",
        stats.average_gas_saved_per_reconciled
    ));
    out.push_str(&format!("Efficiency:           {}%", stats.efficiency_percent));
    out
}

/// Render a caller's reports, one block per report
pub fn format_reports(reports: &[OptimizationReport]) -> String {
    if reports.is_empty() {
        return "No reports".to_string();
    }

    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        let status = if report.is_reconciled() {
            "reconciled"
        } else {
            "estimated"
        };

        out.push_str(&format!(
            "#{} {} [{}]\n    gas: {} -> {} (saved {})\n    created: {}\n",
            i,
            report.target_contract(),
            status,
            report.original_gas_used(),
            report.optimized_gas_used(),
            report.gas_saved(),
            report.created_at().to_rfc3339()
        ));
        for rec in report.recommendations() {
            out.push_str(&format!("    - {}\n", rec));
        }
    }

    out.trim_end().to_string()
}

/// Render ledger-wide statistics
pub fn format_global(stats: &GlobalStats) -> String {
    format!(
        "Optimizations: {}\nCallers:       {}\nReports:       {}\nFee Balance:   {}\nAnalysis Fee:  {}",
        stats.total_optimizations,
        stats.total_callers,
        stats.total_reports,
        stats.fee_balance,
        stats.analysis_fee
    )
}
