use super::fault::Fault;
use super::label::Label;
use crate::Arbitrary;
use crate::MERGE_SEPARATOR;
use std::collections::BTreeSet;

/// The ordered labels under consideration at one level of the search.
///
/// Order defines the index space for every distribution built at this level
/// and the iteration order of the greedy sequence. Labels are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe(Vec<Label>);

impl Universe {
    /// validate and collect labels, preserving order
    pub fn new<I, S>(labels: I) -> Result<Self, Fault>
    where
        I: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        Self::try_from(labels.into_iter().map(S::into).collect::<Vec<_>>())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn labels(&self) -> &[Label] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.0.iter()
    }
    /// everything in the universe that is not in `subset`, in universe order
    pub fn complement<'a>(&'a self, subset: &[&Label]) -> Vec<&'a Label> {
        self.0.iter().filter(|x| !subset.contains(x)).collect()
    }
    /// everything except `label`, in universe order
    pub fn without(&self, label: &Label) -> Vec<Label> {
        self.0.iter().filter(|x| *x != label).cloned().collect()
    }
    /// the next level: `a` and `b` removed, their merge appended
    pub fn merge(&self, a: &Label, b: &Label) -> Self {
        Self(
            self.0
                .iter()
                .filter(|x| *x != a && *x != b)
                .cloned()
                .chain(std::iter::once(Label::merge(a.clone(), b.clone())))
                .collect(),
        )
    }
}

impl TryFrom<Vec<Label>> for Universe {
    type Error = Fault;
    fn try_from(labels: Vec<Label>) -> Result<Self, Self::Error> {
        let ref mut seen = BTreeSet::new();
        for label in labels.iter() {
            if !seen.insert(label) {
                return Err(Fault::DuplicateLabel(label.to_string()));
            }
            if label.leaves().iter().any(|name| name.contains(MERGE_SEPARATOR)) {
                log::warn!(
                    "label {} contains separator {:?}; merged names may read ambiguously",
                    label,
                    MERGE_SEPARATOR
                );
            }
        }
        Ok(Self(labels))
    }
}

impl std::ops::Index<usize> for Universe {
    type Output = Label;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl std::fmt::Display for Universe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Arbitrary for Universe {
    /// between 3 and 8 distinct leaves
    fn random() -> Self {
        let n = rand::random_range(3..=8usize);
        let ref mut seen = BTreeSet::new();
        Self(
            std::iter::repeat_with(Label::random)
                .filter(|x| seen.insert(x.clone()))
                .take(n)
                .collect(),
        )
    }
}
