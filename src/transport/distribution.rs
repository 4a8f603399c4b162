use super::density::Density;
use crate::Probability;

/// A discrete distribution aligned to a subset's enumeration order.
///
/// Built from a subset of labels, it is always uniform: `1/n` repeated `n`
/// times. Only the count matters, the identities of the labels do not.
/// An empty subset yields an empty distribution rather than an error.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Distribution(Vec<Probability>);

impl Distribution {
    /// uniform distribution over `n` points
    pub fn uniform(n: usize) -> Self {
        Self(vec![1. / n as Probability; n])
    }
    /// uniform distribution over the given subset
    pub fn build<T>(nodes: &[T]) -> Self {
        Self::uniform(nodes.len())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn weights(&self) -> &[Probability] {
        &self.0
    }
    pub fn sum(&self) -> Probability {
        self.0.iter().sum()
    }
    /// joint distribution under independence, flattened row-major:
    /// entry `i * other.len() + j` is `self[i] * other[j]`.
    pub fn product(&self, other: &Self) -> Self {
        self.0
            .iter()
            .flat_map(|x| other.0.iter().map(move |y| x * y))
            .collect::<Vec<_>>()
            .into()
    }
}

impl From<Vec<Probability>> for Distribution {
    fn from(weights: Vec<Probability>) -> Self {
        Self(weights)
    }
}

impl Density for Distribution {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Probability {
        self.0.get(*x).copied().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        0..self.0.len()
    }
}
