use tienda_core::DomainResult;
use tienda_products::{Price, Product};

use crate::catalog::Catalog;
use crate::kind::StoreKind;
use crate::policy::PharmacyPolicy;
use crate::sale::{SaleError, SaleOutcome, SaleResult};
use crate::store::Store;

const FREE_SHIPPING_NOTE: &str = " - Envío gratis al solicitar este producto";

/// Pharmacy: per-sale unit cap, and short stock sells out whatever is left.
#[derive(Debug, Clone)]
pub struct Pharmacy {
    catalog: Catalog,
    policy: PharmacyPolicy,
}

impl Pharmacy {
    pub fn new(name: impl Into<String>, delivery_cost: Price) -> DomainResult<Self> {
        Self::with_policy(name, delivery_cost, PharmacyPolicy::default())
    }

    pub fn with_policy(
        name: impl Into<String>,
        delivery_cost: Price,
        policy: PharmacyPolicy,
    ) -> DomainResult<Self> {
        Ok(Self {
            catalog: Catalog::new(name, delivery_cost)?,
            policy,
        })
    }

    pub fn policy(&self) -> &PharmacyPolicy {
        &self.policy
    }
}

impl Store for Pharmacy {
    fn kind(&self) -> StoreKind {
        StoreKind::Pharmacy
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
        let threshold = self.policy.free_shipping_threshold;
        Some(self.catalog.render(|p| {
            let note = if p.price() > threshold { FREE_SHIPPING_NOTE } else { "" };
            format!("{} - ${}{}", p.name(), p.price(), note)
        }))
    }

    fn sell(&mut self, product_name: &str, quantity: u64) -> SaleResult {
        let limit = self.policy.max_units_per_sale;
        self.catalog
            .sell_with(StoreKind::Pharmacy, product_name, quantity, |product, quantity| {
                if quantity > limit {
                    return Err(SaleError::QuantityLimitExceeded {
                        product: product.name().to_string(),
                        requested: quantity,
                        limit,
                    });
                }

                let stock_before = product.stock();
                match product.checked_take(quantity) {
                    Some(stock_after) => Ok(SaleOutcome::Completed {
                        product: product.name().to_string(),
                        quantity,
                        stock_before,
                        stock_after,
                    }),
                    None => Ok(SaleOutcome::PartiallyFilled {
                        product: product.name().to_string(),
                        requested: quantity,
                        sold: product.deplete(),
                    }),
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pharmacy_with(name: &str, price: u64, stock: u64) -> Pharmacy {
        let mut store = Pharmacy::new("Farmacia Sur", Price::new(1500)).unwrap();
        store.add_product(Product::new(name, Price::new(price), stock).unwrap());
        store
    }

    #[test]
    fn listing_flags_free_shipping_strictly_above_threshold() {
        let mut store = Pharmacy::new("Farmacia Sur", Price::new(1500)).unwrap();
        store.add_product(Product::new("Insulina", Price::new(20_000), 5).unwrap());
        store.add_product(Product::new("Aspirina", Price::new(15_000), 5).unwrap());

        let listing = store.list_products(1).unwrap();
        assert_eq!(
            listing,
            "Insulina - $20000 - Envío gratis al solicitar este producto\nAspirina - $15000"
        );
    }

    #[test]
    fn listing_uses_configured_threshold() {
        let policy = PharmacyPolicy {
            free_shipping_threshold: Price::new(100),
            ..PharmacyPolicy::default()
        };
        let mut store = Pharmacy::with_policy("Farmacia Sur", Price::new(0), policy).unwrap();
        assert_eq!(store.policy().free_shipping_threshold, Price::new(100));
        assert_eq!(store.policy().max_units_per_sale, 3);
        store.add_product(Product::new("Gasa", Price::new(101), 1).unwrap());
        assert!(store.list_products(1).unwrap().contains("Envío gratis"));
    }

    #[test]
    fn listing_for_other_kind_is_none() {
        let store = pharmacy_with("Gasa", 900, 1);
        assert_eq!(store.list_products(2), None);
        assert_eq!(store.list_products(3), None);
    }

    #[test]
    fn sell_within_stock_completes() {
        let mut store = pharmacy_with("Paracetamol", 2500, 10);
        let outcome = store.sell("Paracetamol", 3).unwrap();

        assert_eq!(outcome.to_string(), "Venta realizada: 3 unidades de Paracetamol");
        assert_eq!(store.find_product("Paracetamol").unwrap().stock(), 7);
    }

    #[test]
    fn sell_over_limit_is_rejected_without_touching_stock() {
        let mut store = pharmacy_with("Paracetamol", 2500, 10);
        let err = store.sell("Paracetamol", 4).unwrap_err();

        assert_eq!(
            err,
            SaleError::QuantityLimitExceeded {
                product: "Paracetamol".to_string(),
                requested: 4,
                limit: 3,
            }
        );
        assert_eq!(store.find_product("Paracetamol").unwrap().stock(), 10);
    }

    #[test]
    fn short_stock_sells_out_what_is_left() {
        let mut store = pharmacy_with("Jarabe", 4000, 1);
        let outcome = store.sell("Jarabe", 2).unwrap();

        assert_eq!(
            outcome,
            SaleOutcome::PartiallyFilled {
                product: "Jarabe".to_string(),
                requested: 2,
                sold: 1,
            }
        );
        assert_eq!(
            outcome.to_string(),
            "Stock insuficiente. Solo se venderán 1 unidades de Jarabe."
        );
        assert_eq!(store.find_product("Jarabe").unwrap().stock(), 0);
    }

    #[test]
    fn unknown_product_wins_over_quantity_limit() {
        let mut store = pharmacy_with("Jarabe", 4000, 1);
        let err = store.sell("Vitamina C", 9).unwrap_err();
        assert!(matches!(err, SaleError::NotAvailable { .. }));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: more than three units are refused whatever the stock.
        #[test]
        fn over_limit_never_changes_stock(stock in 0u64..1_000, quantity in 4u64..1_000) {
            let mut store = pharmacy_with("Item", 1000, stock);
            let result = store.sell("Item", quantity);
            let is_limit_error = matches!(result, Err(SaleError::QuantityLimitExceeded { .. }));
            prop_assert!(is_limit_error);
            prop_assert_eq!(store.find_product("Item").unwrap().stock(), stock);
        }

        /// Property: within the limit, a sale always succeeds and stock
        /// ends at `stock - quantity` or zero.
        #[test]
        fn within_limit_always_sells(stock in 0u64..20, quantity in 1u64..=3) {
            let mut store = pharmacy_with("Item", 1000, stock);
            let outcome = store.sell("Item", quantity).unwrap();
            let expected = stock.saturating_sub(quantity);
            prop_assert_eq!(store.find_product("Item").unwrap().stock(), expected);
            prop_assert_eq!(outcome.units_sold(), quantity.min(stock));
        }
    }
}
