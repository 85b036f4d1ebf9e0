use tienda_core::DomainResult;
use tienda_products::{Price, Product};

use crate::catalog::Catalog;
use crate::kind::StoreKind;
use crate::policy::SupermarketPolicy;
use crate::sale::{SaleError, SaleOutcome, SaleResult};
use crate::store::Store;

const LOW_STOCK_NOTE: &str = " - Pocos productos disponibles";

/// Supermarket: no unit cap, but a sale needs the full quantity in stock.
#[derive(Debug, Clone)]
pub struct Supermarket {
    catalog: Catalog,
    policy: SupermarketPolicy,
}

impl Supermarket {
    pub fn new(name: impl Into<String>, delivery_cost: Price) -> DomainResult<Self> {
        Self::with_policy(name, delivery_cost, SupermarketPolicy::default())
    }

    pub fn with_policy(
        name: impl Into<String>,
        delivery_cost: Price,
        policy: SupermarketPolicy,
    ) -> DomainResult<Self> {
        Ok(Self {
            catalog: Catalog::new(name, delivery_cost)?,
            policy,
        })
    }

    pub fn policy(&self) -> &SupermarketPolicy {
        &self.policy
    }
}

impl Store for Supermarket {
    fn kind(&self) -> StoreKind {
        StoreKind::Supermarket
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn add_product(&mut self, product: Product) {
        self.catalog.add(product);
    }

    fn list_products(&self, store_type_id: u8) -> Option<String> {
        if !self.kind().matches(store_type_id) {
            return None;
        }
        let threshold = self.policy.low_stock_threshold;
        Some(self.catalog.render(|p| {
            let note = if p.stock() < threshold { LOW_STOCK_NOTE } else { "" };
            format!("{} - Stock: {}{} - ${}", p.name(), p.stock(), note, p.price())
        }))
    }

    fn sell(&mut self, product_name: &str, quantity: u64) -> SaleResult {
        self.catalog
            .sell_with(StoreKind::Supermarket, product_name, quantity, |product, quantity| {
                let stock_before = product.stock();
                let Some(stock_after) = product.checked_take(quantity) else {
                    return Err(SaleError::InsufficientStock {
                        product: product.name().to_string(),
                        requested: quantity,
                        available: stock_before,
                    });
                };
                tracing::debug!(product = product.name(), stock_before, stock_after, "stock updated");
                Ok(SaleOutcome::Completed {
                    product: product.name().to_string(),
                    quantity,
                    stock_before,
                    stock_after,
                })
            })
    }
}
