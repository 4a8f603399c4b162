use super::support::Support;
use crate::Energy;
use crate::Probability;

/// A transport plan between a source and a target support.
///
/// `minimize` consumes the unsolved problem and returns the optimal plan;
/// `flow` and `cost` are then cheap lookups into that plan.
pub trait Coupling {
    type X: Support;
    type Y: Support;

    /// solve for the minimum cost plan
    fn minimize(self) -> Self;
    /// mass moved from `x` to `y` under the current plan
    fn flow(&self, x: &Self::X, y: &Self::Y) -> Probability;
    /// total cost of the current plan
    fn cost(&self) -> Energy;
}
