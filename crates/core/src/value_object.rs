//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two prices of
/// the same amount are the same price. To "modify" one, build a new one.
///
/// - **Value Object**: no identity (`Price(2500) == Price(2500)`)
/// - **Entity**: has identity (two products named "Ibuprofeno" are the same
///   product even when their stock differs)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
