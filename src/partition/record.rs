use super::label::Label;
use crate::Energy;
use serde::Deserialize;
use serde::Serialize;

/// One candidate bipartition recorded during the search.
///
/// `subset1` is the label split off at that level, `subset2` the rest of that
/// level's universe. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    subset1: Vec<Label>,
    subset2: Vec<Label>,
    emd_value: Energy,
}

impl Partition {
    pub fn new(subset1: Vec<Label>, subset2: Vec<Label>, emd_value: Energy) -> Self {
        Self {
            subset1,
            subset2,
            emd_value,
        }
    }
    pub fn subset1(&self) -> &[Label] {
        &self.subset1
    }
    pub fn subset2(&self) -> &[Label] {
        &self.subset2
    }
    pub fn emd(&self) -> Energy {
        self.emd_value
    }
    /// size of the universe this partition was drawn from
    pub fn size(&self) -> usize {
        self.subset1.len() + self.subset2.len()
    }
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |labels: &[Label]| {
            labels
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "[{}] | [{}] emd {:.6}",
            join(&self.subset1),
            join(&self.subset2),
            self.emd_value
        )
    }
}
