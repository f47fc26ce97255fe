//! Placeholder gas estimation.
//!
//! No bytecode is inspected here. The "optimized" figure is a flat
//! discount on the original gas, chosen by how many functions the target
//! contract exposes. It exists so a report has a starting estimate until
//! the caller reconciles it against a measured value.

use crate::utils::config::{
    LARGE_TIER_DISCOUNT_PERCENT, LARGE_TIER_FUNCTION_THRESHOLD, MEDIUM_TIER_DISCOUNT_PERCENT,
    MEDIUM_TIER_FUNCTION_THRESHOLD, SMALL_TIER_DISCOUNT_PERCENT,
};

/// Discount percentage applied for a given function count
///
/// **Public** - exposed so callers can show which tier was used
///
/// * more than 10 functions: 25%
/// * more than 5 functions: 15%
/// * otherwise: 10%
pub fn discount_percent(function_count: usize) -> u64 {
    if function_count > LARGE_TIER_FUNCTION_THRESHOLD {
        LARGE_TIER_DISCOUNT_PERCENT
    } else if function_count > MEDIUM_TIER_FUNCTION_THRESHOLD {
        MEDIUM_TIER_DISCOUNT_PERCENT
    } else {
        SMALL_TIER_DISCOUNT_PERCENT
    }
}

/// Estimate optimized gas for a contract
///
/// **Public** - main entry point for estimation
///
/// # Arguments
/// * `original_gas` - Gas used before optimization (caller guarantees > 0)
/// * `function_count` - Number of function signatures analyzed
///
/// # Returns
/// `original_gas - floor(original_gas * factor / 100)`
pub fn estimate(original_gas: u64, function_count: usize) -> u64 {
    let factor = discount_percent(function_count);

    // Widen so very large gas values cannot overflow the multiplication
    let discount = (original_gas as u128 * factor as u128 / 100) as u64;

    original_gas - discount
}
