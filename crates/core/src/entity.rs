//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identity key of the entity.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identity.
    fn id(&self) -> &Self::Id;

    /// Two entities are the same entity when their identities match, whatever
    /// the rest of their state looks like.
    fn is_same(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Shelf {
        label: String,
        slots: u32,
    }

    impl Entity for Shelf {
        type Id = str;

        fn id(&self) -> &str {
            &self.label
        }
    }

    #[test]
    fn is_same_compares_identity_only() {
        let a = Shelf { label: "A1".to_string(), slots: 4 };
        let b = Shelf { label: "A1".to_string(), slots: 9 };
        let c = Shelf { label: "B2".to_string(), slots: 4 };

        assert!(a.is_same(&b));
        assert!(!a.is_same(&c));
        assert_ne!(a.slots, b.slots);
    }
}
