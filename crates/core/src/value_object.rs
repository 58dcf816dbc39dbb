//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - two instances
/// with the same attribute values are the same value. To "modify" one, create
/// a new one. Audit records are the canonical case in this domain: once a
/// fact is recorded it never changes.
///
/// The trait bounds keep value objects cheap to copy, comparable, and
/// debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
