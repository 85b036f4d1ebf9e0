use tienda_core::DomainResult;
use tienda_products::{Price, Product};

use crate::catalog::Catalog;
use crate::kind::StoreKind;
use crate::sale::{SaleOutcome, SaleResult};
use crate::store::Store;

/// Restaurant: dishes are made to order, so selling neither checks nor
/// consumes stock. Only the name has to be on the menu.
#[derive(Debug, Clone)]
pub struct Restaurant {
    catalog: Catalog,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, delivery_cost: Price) -> DomainResult<Self> {
        Ok(Self {
            catalog: Catalog::new(name, delivery_cost)?,
        })
    }
}

impl Store for Restaurant {
    fn kind(&self) -> StoreKind {
        StoreKind::Restaurant
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
        Some(self.catalog.render(|p| format!("{} - ${}", p.name(), p.price())))
    }

    fn sell(&mut self, product_name: &str, quantity: u64) -> SaleResult {
        self.catalog
            .sell_with(StoreKind::Restaurant, product_name, quantity, |product, quantity| {
                Ok(SaleOutcome::Completed {
                    product: product.name().to_string(),
                    quantity,
                    stock_before: product.stock(),
                    stock_after: product.stock(),
                })
            })
    }
}
