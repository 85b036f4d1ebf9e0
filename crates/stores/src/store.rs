use tienda_core::DomainResult;
use tienda_products::{Price, Product};

use crate::catalog::Catalog;
use crate::kind::StoreKind;
use crate::pharmacy::Pharmacy;
use crate::restaurant::Restaurant;
use crate::sale::SaleResult;
use crate::supermarket::Supermarket;

/// Capability set shared by every store kind.
///
/// Read accessors are provided on top of [`Store::catalog`]; the three
/// operations are implemented per kind.
pub trait Store: core::fmt::Debug + Send {
    fn kind(&self) -> StoreKind;

    fn catalog(&self) -> &Catalog;

    fn name(&self) -> &str {
        self.catalog().name()
    }

    fn delivery_cost(&self) -> Price {
        self.catalog().delivery_cost()
    }

    fn products(&self) -> &[Product] {
        self.catalog().products()
    }

    fn find_product(&self, product_name: &str) -> Option<&Product> {
        self.catalog().find(product_name)
    }

    /// Ingest `product`, merging stock into an existing entry of the same name.
    fn add_product(&mut self, product: Product);

    /// Kind-specific listing, one line per product.
    ///
    /// Returns `None` when `store_type_id` is not this store's own id.
    fn list_products(&self, store_type_id: u8) -> Option<String>;

    /// Sell `quantity` units of the product named `product_name`.
    fn sell(&mut self, product_name: &str, quantity: u64) -> SaleResult;
}

/// Open a store of `kind` with default policies.
pub fn open_store(
    kind: StoreKind,
    name: impl Into<String>,
    delivery_cost: Price,
) -> DomainResult<Box<dyn Store>> {
    let store: Box<dyn Store> = match kind {
        StoreKind::Pharmacy => Box::new(Pharmacy::new(name, delivery_cost)?),
        StoreKind::Supermarket => Box::new(Supermarket::new(name, delivery_cost)?),
        StoreKind::Restaurant => Box::new(Restaurant::new(name, delivery_cost)?),
    };
    Ok(store)
}
