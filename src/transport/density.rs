use super::support::Support;
use crate::Probability;

/// A discrete probability distribution over a support set.
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the probability mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Probability;
    /// Iterates over all points of the support, in order.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
}
