use crate::Energy;
use crate::Probability;

/// Ground metric between two points of mass.
///
/// The cost of pairing a source mass with a target mass. This is what the
/// assignment solver minimizes over.
pub trait Measure {
    fn distance(&self, x: Probability, y: Probability) -> Energy;
}

/// Absolute difference `|x - y|` between two probability masses.
#[derive(Debug, Default, Clone, Copy)]
pub struct Absolute;

impl Measure for Absolute {
    fn distance(&self, x: Probability, y: Probability) -> Energy {
        (x - y).abs()
    }
}
