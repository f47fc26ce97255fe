//! Fixed recommendation sets attached to each report.

use crate::utils::config::{RECOMMENDATION_COUNT, RECOMMENDATION_TIER_THRESHOLD};

/// Advice for larger contracts, focused on storage layout and visibility
pub const STORAGE_LAYOUT_ADVICE: [&str; RECOMMENDATION_COUNT] = [
    "Pack related storage variables into shared 32-byte slots",
    "Declare functions only called from outside as external instead of public",
    "Cache repeated storage reads in local memory variables",
];

/// Advice for smaller contracts, focused on control flow and low-level calls
pub const CONTROL_FLOW_ADVICE: [&str; RECOMMENDATION_COUNT] = [
    "Replace revert strings with custom errors",
    "Wrap arithmetic that cannot overflow in unchecked blocks",
    "Order conditionals so the cheapest check short-circuits first",
];

/// Pick the recommendation set for a contract
///
/// **Public** - called by the report store on creation
///
/// # Arguments
/// * `function_count` - Number of function signatures analyzed
///
/// # Returns
/// Exactly three recommendations, in display order
pub fn recommend(function_count: usize) -> [String; RECOMMENDATION_COUNT] {
    let set = if function_count > RECOMMENDATION_TIER_THRESHOLD {
        STORAGE_LAYOUT_ADVICE
    } else {
        CONTROL_FLOW_ADVICE
    };

    set.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(recommend(5), CONTROL_FLOW_ADVICE.map(str::to_string));
        assert_eq!(recommend(6), STORAGE_LAYOUT_ADVICE.map(str::to_string));
    }

    #[test]
    fn test_always_three_entries() {
        for count in [1, 5, 6, 100] {
            let recs = recommend(count);
            assert_eq!(recs.len(), 3);
            assert!(recs.iter().all(|r| !r.is_empty()));
        }
    }
}
