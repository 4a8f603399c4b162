use super::label::Label;
use super::universe::Universe;
use crate::Energy;
use crate::transport::EMD;

/// Marginal gain `g` over a fixed universe.
///
/// `g(S)` is the transport cost of `S` against its complement. Splits with
/// an empty side score `+∞` so they can never win a minimization.
pub struct Gain<'a> {
    universe: &'a Universe,
}

impl Gain<'_> {
    pub fn g(&self, subset: &[&Label]) -> Energy {
        let complement = self.universe.complement(subset);
        if subset.is_empty() || complement.is_empty() {
            Energy::INFINITY
        } else {
            EMD::cost(subset, &complement, self.universe.labels())
        }
    }
    /// `g(built ∪ {node}) - g({node})`
    pub fn marginal(&self, built: &[&Label], node: &Label) -> Energy {
        let union = built
            .iter()
            .copied()
            .chain(std::iter::once(node))
            .collect::<Vec<_>>();
        self.g(&union) - self.g(&[node])
    }
}

impl<'a> From<&'a Universe> for Gain<'a> {
    fn from(universe: &'a Universe) -> Self {
        Self { universe }
    }
}
