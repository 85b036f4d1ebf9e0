//! Products domain module.
//!
//! A product is a named, priced, stocked item. Identity is the name; stock is
//! the only state that changes after construction.

pub mod product;

pub use product::{Price, Product};
