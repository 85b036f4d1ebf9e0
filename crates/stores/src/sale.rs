//! Typed results of a sale attempt.
//!
//! `Display` renders the customer-facing message for each outcome, so callers
//! that only want text can print the result while others match on variants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tienda_core::DomainError;

pub type SaleResult = Result<SaleOutcome, SaleError>;

/// A sale that went through (fully or partially).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaleOutcome {
    /// The requested quantity was sold.
    ///
    /// `stock_before == stock_after` for stores that do not track stock on
    /// sale (restaurants).
    Completed {
        product: String,
        quantity: u64,
        stock_before: u64,
        stock_after: u64,
    },
    /// Less than requested was available; everything left was sold and the
    /// product is now out of stock.
    PartiallyFilled {
        product: String,
        requested: u64,
        sold: u64,
    },
}

impl SaleOutcome {
    pub fn product(&self) -> &str {
        match self {
            SaleOutcome::Completed { product, .. } | SaleOutcome::PartiallyFilled { product, .. } => {
                product
            }
        }
    }

    pub fn units_sold(&self) -> u64 {
        match self {
            SaleOutcome::Completed { quantity, .. } => *quantity,
            SaleOutcome::PartiallyFilled { sold, .. } => *sold,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SaleOutcome::Completed { .. })
    }
}

impl core::fmt::Display for SaleOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SaleOutcome::Completed {
                product, quantity, ..
            } => write!(f, "Venta realizada: {quantity} unidades de {product}"),
            SaleOutcome::PartiallyFilled { product, sold, .. } => write!(
                f,
                "Stock insuficiente. Solo se venderán {sold} unidades de {product}."
            ),
        }
    }
}

/// A sale that was refused. Refusals never change stock.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SaleError {
    #[error("El producto solicitado no está disponible")]
    NotAvailable { product: String },

    #[error("No hay suficiente stock para realizar la venta")]
    InsufficientStock {
        product: String,
        requested: u64,
        available: u64,
    },

    #[error("No se puede solicitar más de {limit} unidades por venta en una farmacia")]
    QuantityLimitExceeded {
        product: String,
        requested: u64,
        limit: u64,
    },

    #[error("La cantidad solicitada debe ser mayor a cero")]
    InvalidQuantity { product: String },
}

impl SaleError {
    pub fn product(&self) -> &str {
        match self {
            SaleError::NotAvailable { product }
            | SaleError::InsufficientStock { product, .. }
            | SaleError::QuantityLimitExceeded { product, .. }
            | SaleError::InvalidQuantity { product } => product,
        }
    }
}

impl From<SaleError> for DomainError {
    fn from(err: SaleError) -> Self {
        match err {
            SaleError::NotAvailable { .. } => DomainError::not_found(),
            SaleError::InvalidQuantity { .. } => DomainError::validation(err.to_string()),
            SaleError::InsufficientStock { .. } | SaleError::QuantityLimitExceeded { .. } => {
                DomainError::invariant(err.to_string())
            }
        }
    }
}
