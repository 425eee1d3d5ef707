//! Aggregate value calculation from decoded reserves
//!
//! Prices are scaled to fixed-point with six decimal places and truncated
//! to an integer before any multiplication; each reserve term is then
//! floor-divided back by the scale. All arithmetic is 128-bit, which is
//! exact for every 64-bit reserve and fixed-6 price pair.

use super::types::{pool_log, PoolRecord, PRICE_FIXED_SCALE};

/// Scale a unit price to a fixed-6 integer, truncating the remainder.
/// Sub-microunit price precision is discarded.
pub fn price_to_fixed6(price: f64) -> u64 {
    if !price.is_finite() || price <= 0.0 {
        return 0;
    }
    (price * PRICE_FIXED_SCALE as f64) as u64
}

/// One reserve term: floor(reserve * price_fixed6 / 1e6)
fn reserve_value(reserve: u64, price_fixed6: u64) -> u128 {
    (reserve as u128 * price_fixed6 as u128) / PRICE_FIXED_SCALE
}

/// Aggregate value of both reserves given fixed-6 unit prices
pub fn aggregate_value(record: &PoolRecord, base_price_fixed6: u64, quote_price_fixed6: u64) -> u128 {
    let base_value = reserve_value(record.base_reserve, base_price_fixed6);
    let quote_value = reserve_value(record.quote_reserve, quote_price_fixed6);
    let total = base_value + quote_value;

    pool_log(
        "DEBUG",
        &format!(
            "Aggregate value: base {} x {} + quote {} x {} = {}",
            record.base_reserve, base_price_fixed6, record.quote_reserve, quote_price_fixed6, total
        ),
    );

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn record(base_reserve: u64, quote_reserve: u64) -> PoolRecord {
        PoolRecord {
            base_reserve,
            quote_reserve,
            base_mint: Pubkey::new_unique(),
            quote_mint: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_price_to_fixed6_truncates() {
        assert_eq!(price_to_fixed6(20.0), 20_000_000);
        assert_eq!(price_to_fixed6(1.0), 1_000_000);
        assert_eq!(price_to_fixed6(1.5), 1_500_000);
        // Sub-microunit precision is dropped
        assert_eq!(price_to_fixed6(0.000_000_9), 0);
        assert_eq!(price_to_fixed6(1.000_000_9), 1_000_000);
    }

    #[test]
    fn test_price_to_fixed6_rejects_non_positive() {
        assert_eq!(price_to_fixed6(0.0), 0);
        assert_eq!(price_to_fixed6(-3.0), 0);
        assert_eq!(price_to_fixed6(f64::NAN), 0);
        assert_eq!(price_to_fixed6(f64::INFINITY), 0);
    }

    #[test]
    fn test_reference_aggregate() {
        // reserves (1e9, 2e9) with SOL=20, USDC=1 -> 22e9
        let rec = record(1_000_000_000, 2_000_000_000);
        let total = aggregate_value(&rec, price_to_fixed6(20.0), price_to_fixed6(1.0));
        assert_eq!(total, 22_000_000_000);
    }

    #[test]
    fn test_fractional_price_floors_per_term() {
        // 3 units at 0.5 -> floor(3 * 500000 / 1e6) = 1, not 1.5
        let rec = record(3, 0);
        let total = aggregate_value(&rec, price_to_fixed6(0.5), 0);
        assert_eq!(total, 1);
    }

    #[test]
    fn test_max_reserves_do_not_overflow() {
        let rec = record(u64::MAX, u64::MAX);
        let price = price_to_fixed6(20.0);
        let expected_term = (u64::MAX as u128 * price as u128) / PRICE_FIXED_SCALE;
        assert_eq!(aggregate_value(&rec, price, price), expected_term * 2);
    }

    #[test]
    fn test_zero_reserves_yield_zero() {
        let rec = record(0, 0);
        assert_eq!(aggregate_value(&rec, 20_000_000, 1_000_000), 0);
    }
}
