//! Stores domain module.
//!
//! Three store kinds share one contract ([`Store`]): ingest products (merging
//! stock by name), render a kind-specific listing, and sell. Each kind applies
//! its own selling policy. All logic is synchronous and in-memory.

pub mod catalog;
pub mod kind;
pub mod pharmacy;
pub mod policy;
pub mod restaurant;
pub mod sale;
pub mod store;
pub mod supermarket;

pub use catalog::Catalog;
pub use kind::StoreKind;
pub use pharmacy::Pharmacy;
pub use policy::{PharmacyPolicy, SupermarketPolicy};
pub use restaurant::Restaurant;
pub use sale::{SaleError, SaleOutcome, SaleResult};
pub use store::{Store, open_store};
pub use supermarket::Supermarket;
