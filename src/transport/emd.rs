use super::coupling::Coupling;
use super::distribution::Distribution;
use super::hungarian::Hungarian;
use super::matrix::CostMatrix;
use crate::Energy;

/// Transport cost between two subsets, relative to a reference set.
///
/// 1. uniform distributions over `a`, `b`, and `full`
/// 2. joint distribution `a ⊗ b` under independence
/// 3. ground costs `|joint[i] - full[j]|`
/// 4. minimum-cost assignment between joint and full supports
///
/// An empty `a` or `b` collapses the joint distribution, so the cost is zero
/// rather than infinite. Forbidding degenerate splits is left to the caller.
pub struct EMD {
    joint: Distribution,
    full: Distribution,
    matrix: CostMatrix,
}

impl EMD {
    pub fn cost<A, B, C>(a: &[A], b: &[B], full: &[C]) -> Energy {
        Self::from((a, b, full)).minimize()
    }
    pub fn joint(&self) -> &Distribution {
        &self.joint
    }
    pub fn full(&self) -> &Distribution {
        &self.full
    }
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }
    /// sum of ground costs along the optimal assignment
    pub fn minimize(&self) -> Energy {
        Hungarian::from(&self.matrix).minimize().cost()
    }
}

impl<A, B, C> From<(&[A], &[B], &[C])> for EMD {
    fn from((a, b, full): (&[A], &[B], &[C])) -> Self {
        let joint = Distribution::build(a).product(&Distribution::build(b));
        let full = Distribution::build(full);
        let matrix = CostMatrix::from((&joint, &full));
        Self {
            joint,
            full,
            matrix,
        }
    }
}
