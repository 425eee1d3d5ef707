//! Price source capability
//!
//! The pool reader asks a PriceSource for per-unit prices by symbol. The
//! shipped implementation is a fixed in-memory table; a live feed can be
//! substituted behind the same trait without touching the reader.

use crate::logger::{self, LogTag};
use std::collections::HashMap;

/// Capability for looking up a unit price by symbol.
///
/// Returns None when the symbol is unknown. Callers must treat a miss as
/// an explicit failure, never feed an absent price into arithmetic.
pub trait PriceSource: Send + Sync {
    fn price(&self, symbol: &str) -> Option<f64>;
}

/// Fixed in-memory price table.
///
/// Stands in for a real price feed. Prices are per whole unit of the
/// symbol's asset.
pub struct StaticPriceTable {
    prices: HashMap<String, f64>,
}

impl StaticPriceTable {
    /// The default table carries the two symbols the reader prices
    pub fn new() -> Self {
        let mut prices = HashMap::new();
        prices.insert("SOL".to_string(), 20.0);
        prices.insert("USDC".to_string(), 1.0);
        Self { prices }
    }

    /// Build a table from explicit entries (used by tests and tools)
    pub fn with_prices(entries: &[(&str, f64)]) -> Self {
        let prices = entries
            .iter()
            .map(|(s, p)| (s.to_string(), *p))
            .collect::<HashMap<_, _>>();
        Self { prices }
    }
}

impl Default for StaticPriceTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceSource for StaticPriceTable {
    fn price(&self, symbol: &str) -> Option<f64> {
        match self.prices.get(symbol) {
            Some(price) => {
                logger::debug(
                    LogTag::Price,
                    &format!("Price lookup {}: {}", symbol, price),
                );
                Some(*price)
            }
            None => {
                logger::debug(LogTag::Price, &format!("Price lookup miss: {}", symbol));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_entries() {
        let table = StaticPriceTable::new();
        assert_eq!(table.price("SOL"), Some(20.0));
        assert_eq!(table.price("USDC"), Some(1.0));
    }

    #[test]
    fn test_unknown_symbol_is_a_miss() {
        let table = StaticPriceTable::new();
        assert_eq!(table.price("BONK"), None);
        assert_eq!(table.price("sol"), None); // case-sensitive by contract
    }

    #[test]
    fn test_custom_table() {
        let table = StaticPriceTable::with_prices(&[("ABC", 2.5)]);
        assert_eq!(table.price("ABC"), Some(2.5));
        assert_eq!(table.price("SOL"), None);
    }
}
