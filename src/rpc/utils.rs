//! Small conversion helpers shared across RPC callers

use crate::constants::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Parse a base58 pubkey string with a readable error
pub fn parse_pubkey_string(s: &str) -> Result<Pubkey, String> {
    Pubkey::from_str(s).map_err(|e| format!("Invalid pubkey '{}': {}", s, e))
}

/// Convert a SOL amount to lamports
pub fn sol_to_lamports(sol_amount: f64) -> u64 {
    (sol_amount * LAMPORTS_PER_SOL as f64) as u64
}

/// Convert lamports to a SOL amount
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pubkey_string() {
        assert!(parse_pubkey_string("So11111111111111111111111111111111111111112").is_ok());
        assert!(parse_pubkey_string("not-a-pubkey").is_err());
    }

    #[test]
    fn test_sol_lamport_conversions() {
        assert_eq!(sol_to_lamports(1.0), 1_000_000_000);
        assert_eq!(sol_to_lamports(0.5), 500_000_000);
        assert_eq!(lamports_to_sol(1_000_000_000), 1.0);
    }
}
