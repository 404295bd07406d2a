//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// value objects with the same values are the same value. `Money` and a cart
/// line's `Customization` are value objects; a `MenuItem` (which keeps its
/// identity across price edits) is an entity.
///
/// To "modify" a value object, build a new one. The bounds keep value objects
/// cheap to copy and easy to assert on in tests.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
