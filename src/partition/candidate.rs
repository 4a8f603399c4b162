use super::label::Label;

/// The last two labels of a greedy sequence.
///
/// The second of the pair is split off as a partition; both are then merged
/// into a single compound label for the next level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate(Label, Label);

impl Candidate {
    pub fn penultimate(&self) -> &Label {
        &self.0
    }
    pub fn last(&self) -> &Label {
        &self.1
    }
}

impl From<(Label, Label)> for Candidate {
    fn from((a, b): (Label, Label)) -> Self {
        Self(a, b)
    }
}
impl From<Candidate> for (Label, Label) {
    fn from(candidate: Candidate) -> Self {
        (candidate.0, candidate.1)
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
