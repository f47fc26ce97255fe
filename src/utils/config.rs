//! Configuration and constants for the ledger and CLI.

/// Current state file schema version
pub const STATE_SCHEMA_VERSION: &str = "1.0.0";

/// Default location of the ledger state file
pub const DEFAULT_STATE_PATH: &str = "gas-ledger.json";

/// Fee charged per analysis request when none is configured
pub const DEFAULT_ANALYSIS_FEE: u64 = 1_000;

// Estimation tiers. Comparisons are strict: a count equal to a
// threshold stays in the lower tier.
pub const MEDIUM_TIER_FUNCTION_THRESHOLD: usize = 5;
pub const LARGE_TIER_FUNCTION_THRESHOLD: usize = 10;

pub const SMALL_TIER_DISCOUNT_PERCENT: u64 = 10;
pub const MEDIUM_TIER_DISCOUNT_PERCENT: u64 = 15;
pub const LARGE_TIER_DISCOUNT_PERCENT: u64 = 25;

/// Above this function count the storage-layout advice set is used
pub const RECOMMENDATION_TIER_THRESHOLD: usize = 5;

/// Number of recommendations attached to every report
pub const RECOMMENDATION_COUNT: usize = 3;
