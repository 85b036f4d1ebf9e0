//! Per-kind selling and listing knobs.
//!
//! Defaults hold the house rules; callers may deserialize their own values
//! from whatever configuration source they use.

use serde::{Deserialize, Serialize};

use tienda_products::Price;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmacyPolicy {
    /// Requests above this many units are refused outright.
    pub max_units_per_sale: u64,
    /// Products priced strictly above this ship for free.
    pub free_shipping_threshold: Price,
}

impl Default for PharmacyPolicy {
    fn default() -> Self {
        Self {
            max_units_per_sale: 3,
            free_shipping_threshold: Price::new(15_000),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupermarketPolicy {
    /// Stock strictly below this is flagged as running low in listings.
    pub low_stock_threshold: u64,
}

impl Default for SupermarketPolicy {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
        }
    }
}
