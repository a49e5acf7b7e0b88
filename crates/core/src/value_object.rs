//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Everything this integration computes is a value: two language tags with
/// the same string are the same tag, and "modifying" one means producing a
/// new one. The trait bounds document that: cheap to clone, comparable by
/// value, debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
