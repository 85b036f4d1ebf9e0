use serde::{Deserialize, Serialize};

use tienda_core::DomainError;

/// The three store kinds, each with a fixed numeric id used to gate listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Pharmacy,
    Supermarket,
    Restaurant,
}

impl StoreKind {
    pub const ALL: [StoreKind; 3] = [
        StoreKind::Pharmacy,
        StoreKind::Supermarket,
        StoreKind::Restaurant,
    ];

    /// Numeric store-type id (1 = pharmacy, 2 = supermarket, 3 = restaurant).
    pub const fn id(self) -> u8 {
        match self {
            StoreKind::Pharmacy => 1,
            StoreKind::Supermarket => 2,
            StoreKind::Restaurant => 3,
        }
    }

    pub fn matches(self, store_type_id: u8) -> bool {
        self.id() == store_type_id
    }
}

impl TryFrom<u8> for StoreKind {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        StoreKind::ALL
            .into_iter()
            .find(|kind| kind.matches(value))
            .ok_or_else(|| DomainError::validation(format!("unknown store type id: {value}")))
    }
}

impl core::fmt::Display for StoreKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            StoreKind::Pharmacy => "pharmacy",
            StoreKind::Supermarket => "supermarket",
            StoreKind::Restaurant => "restaurant",
        };
        f.write_str(label)
    }
}
