/// Marker trait for types that index the support of a distribution.
///
/// Distributions here are uniform over an enumerated subset, so the support
/// is just the position within that enumeration.
pub trait Support: Clone {}

/// usize implements Support as an index into a subset's enumeration order.
impl Support for usize {}
