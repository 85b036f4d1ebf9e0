//! State shared by every store kind: identity, delivery cost, product list.

use serde::Serialize;

use tienda_core::{DomainError, DomainResult, Entity};
use tienda_products::{Price, Product};

use crate::kind::StoreKind;
use crate::sale::{SaleError, SaleResult};

/// Ordered product list with at most one entry per product name.
///
/// The list is only reachable read-only from outside the crate; every
/// mutation goes through [`Catalog::add`] or a sale so the one-entry-per-name
/// rule cannot be broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    name: String,
    delivery_cost: Price,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(name: impl Into<String>, delivery_cost: Price) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("store name cannot be empty"));
        }
        Ok(Self {
            name,
            delivery_cost,
            products: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn delivery_cost(&self) -> Price {
        self.delivery_cost
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name() == product_name)
    }

    /// Ingest a product: merge its stock into the entry with the same name,
    /// or append it at the end. The incoming price is dropped on merge.
    pub fn add(&mut self, product: Product) {
        match self.products.iter_mut().find(|p| p.is_same(&product)) {
            Some(existing) => {
                let stock = existing.restock(product.stock());
                tracing::debug!(
                    store = %self.name,
                    product = existing.name(),
                    added = product.stock(),
                    stock,
                    "merged stock into existing product"
                );
            }
            None => {
                tracing::debug!(
                    store = %self.name,
                    product = product.name(),
                    stock = product.stock(),
                    "added new product"
                );
                self.products.push(product);
            }
        }
    }

    /// One line per product in list order, joined with `\n`.
    pub(crate) fn render<F>(&self, line: F) -> String
    where
        F: Fn(&Product) -> String,
    {
        self.products.iter().map(line).collect::<Vec<_>>().join("\n")
    }

    /// Locate `product_name` and hand it to the kind-specific `policy`.
    ///
    /// Unknown names, then zero quantities, are refused here before any policy
    /// runs. Completed sales log at info; partial fills and refusals at warn.
    pub(crate) fn sell_with<F>(
        &mut self,
        kind: StoreKind,
        product_name: &str,
        quantity: u64,
        policy: F,
    ) -> SaleResult
    where
        F: FnOnce(&mut Product, u64) -> SaleResult,
    {
        let result = match self.products.iter_mut().find(|p| p.name() == product_name) {
            None => Err(SaleError::NotAvailable {
                product: product_name.to_string(),
            }),
            Some(_) if quantity == 0 => Err(SaleError::InvalidQuantity {
                product: product_name.to_string(),
            }),
            Some(product) => policy(product, quantity),
        };

        match &result {
            Ok(outcome) if outcome.is_complete() => tracing::info!(
                store = %self.name,
                %kind,
                product = product_name,
                quantity,
                sold = outcome.units_sold(),
                "{outcome}"
            ),
            Ok(outcome) => tracing::warn!(
                store = %self.name,
                %kind,
                product = product_name,
                quantity,
                sold = outcome.units_sold(),
                "{outcome}"
            ),
            Err(err) => tracing::warn!(
                store = %self.name,
                %kind,
                product = product_name,
                quantity,
                "{err}"
            ),
        }

        result
    }
}
