use serde::{Deserialize, Serialize};

use tienda_core::{DomainError, DomainResult, Entity, ValueObject};

/// Amount in whole currency units (no fractional part, no currency code).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(self) -> u64 {
        self.0
    }
}

impl ValueObject for Price {}

impl From<u64> for Price {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: Product.
///
/// Two products are the same product when their names match; price and stock
/// are not part of the identity (see [`Entity::is_same`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Price,
    stock: u64,
}

impl Product {
    /// Build a product. The name must contain something other than whitespace.
    pub fn new(name: impl Into<String>, price: Price, stock: u64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self {
            name,
            price,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    /// Add units to the stock. Returns the new stock level.
    pub fn restock(&mut self, units: u64) -> u64 {
        self.stock = self.stock.saturating_add(units);
        self.stock
    }

    /// Remove `units` from stock if there are enough of them.
    ///
    /// Returns the remaining stock, or `None` (leaving stock untouched) when
    /// fewer than `units` are available.
    pub fn checked_take(&mut self, units: u64) -> Option<u64> {
        let remaining = self.stock.checked_sub(units)?;
        self.stock = remaining;
        Some(remaining)
    }

    /// Empty the stock entirely. Returns how many units were removed.
    pub fn deplete(&mut self) -> u64 {
        core::mem::take(&mut self.stock)
    }
}

impl Entity for Product {
    type Id = str;

    fn id(&self) -> &str {
        &self.name
    }
}
