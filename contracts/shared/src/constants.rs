//! Common constants used across the worker proposal contracts
//!
//! This module defines the shared limits and configuration values so the WPS
//! contract, the producer registry and their tests agree on them.

// ===== Decimals Constants =====

/// Standard Stellar asset decimals
pub const STELLAR_DECIMAL_PLACES: u32 = 7;

/// Stroops per unit (10^7)
pub const STROOPS_PER_UNIT: i128 = 10i128.pow(STELLAR_DECIMAL_PLACES);

// ===== Time Constants (in seconds) =====

/// One day in seconds (86400)
pub const ONE_DAY_SECONDS: u64 = 86_400;

/// One month in seconds (approximately 30.44 days)
pub const ONE_MONTH_SECONDS: u64 = 2_629_746;

/// Default voting interval (one month)
pub const DEFAULT_VOTING_INTERVAL_SECONDS: u64 = ONE_MONTH_SECONDS;

/// Proposals cannot be activated this close to the end of a voting period (7 days)
pub const ACTIVATION_CUTOFF_SECONDS: u64 = 7 * ONE_DAY_SECONDS;

// ===== Proposal Constants =====

/// Minimum proposal name length
pub const MIN_PROPOSAL_NAME_LENGTH: u32 = 3;

/// Maximum proposal name length
pub const MAX_PROPOSAL_NAME_LENGTH: u32 = 32;

/// Titles must be strictly shorter than this
pub const MAX_TITLE_LENGTH: u32 = 1024;

/// Proposal JSON must be strictly shorter than this
pub const MAX_PROPOSAL_JSON_LENGTH: u32 = 32_768;

/// Minimum monthly budget (100 units)
pub const MIN_MONTHLY_BUDGET: i128 = 100 * STROOPS_PER_UNIT;

/// Minimum number of monthly payments
pub const MIN_PAYMENTS: u32 = 1;

/// Maximum number of monthly payments
pub const MAX_PAYMENTS: u32 = 6;

// ===== Voter Eligibility Constants =====

/// Minimum per-vote pay a producer must earn to vote (100 units)
pub const MIN_PRODUCER_VOTE_PAY: i128 = 100 * STROOPS_PER_UNIT;

// ===== Storage TTL Constants =====

/// Persistent entries are bumped to roughly one year of ledgers (~5s per ledger)
pub const PERSISTENT_TTL_LEDGERS: u32 = 6_312_000;

/// Bump persistent entries once they fall below this many ledgers
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_LEDGERS - 100_000;

// ===== Validation Helper Functions =====

/// Validate the number of monthly payments
pub fn is_payments_valid(payments: u32) -> bool {
    payments >= MIN_PAYMENTS && payments <= MAX_PAYMENTS
}

/// Convert whole units to stroops
pub fn units_to_stroops(units: i128) -> i128 {
    units * STROOPS_PER_UNIT
}
