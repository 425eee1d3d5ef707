use crate::logger::{log, LogTag};
use solana_sdk::pubkey::Pubkey;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Fixed prefix length of a pool record: two u64 reserves + two pubkeys
pub const POOL_RECORD_LEN: usize = 80;

/// Prices are carried as integers scaled by one million
pub const PRICE_FIXED_SCALE: u128 = 1_000_000;

// =============================================================================
// POOL RECORD
// =============================================================================

/// Decoded fixed-layout pool record
///
/// Little-endian base and quote reserves followed by the two mint
/// addresses, in storage order. Only the 80-byte prefix of the account is
/// interpreted; trailing bytes are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolRecord {
    pub base_reserve: u64,
    pub quote_reserve: u64,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
}

/// Helper for pool reader logging (always visible)
pub fn pool_log(log_type: &str, message: &str) {
    log(LogTag::Pool, log_type, message);
}
