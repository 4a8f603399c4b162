use crate::Arbitrary;
use crate::MERGE_SEPARATOR;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// An element of the universe.
///
/// Either an original node name or the merge of two labels from an earlier
/// level. Equality is structural, so a compound label can never collide with
/// a leaf, even one whose name happens to contain the separator. The joined
/// string form is only ever used for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Leaf(String),
    Merged(Box<Label>, Box<Label>),
}

impl Label {
    pub fn leaf(name: impl Into<String>) -> Self {
        Self::Leaf(name.into())
    }
    pub fn merge(a: Self, b: Self) -> Self {
        Self::Merged(Box::new(a), Box::new(b))
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
    /// original node names, left to right
    pub fn leaves(&self) -> Vec<&str> {
        match self {
            Self::Leaf(name) => vec![name.as_str()],
            Self::Merged(a, b) => a.leaves().into_iter().chain(b.leaves()).collect(),
        }
    }
    /// number of original nodes folded into this label
    pub fn size(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Merged(a, b) => a.size() + b.size(),
        }
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Self::leaf(name)
    }
}
impl From<String> for Label {
    fn from(name: String) -> Self {
        Self::Leaf(name)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(name) => write!(f, "{}", name),
            Self::Merged(a, b) => write!(f, "{}{}{}", a, MERGE_SEPARATOR, b),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// compound structure is not recoverable from the joined string
impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Leaf)
    }
}

impl Arbitrary for Label {
    fn random() -> Self {
        let name = (b'a' + rand::random_range(0..26u8)) as char;
        match rand::random_range(0..3u8) {
            0 => Self::leaf(format!("{}t", name)),
            k => Self::leaf(format!("{}t+{}", name, k)),
        }
    }
}
