use crate::partition::Label;
use serde::Deserialize;
use serde::Serialize;

/// A system variable observed at a discrete time step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub time_step: u32,
}

impl Node {
    pub fn new(name: impl Into<String>, time_step: u32) -> Self {
        Self {
            name: name.into(),
            time_step,
        }
    }
    /// `n` variables observed at t, then the same `n` at t+1
    pub fn system(n: usize) -> Vec<Self> {
        let names = (0..n)
            .map(|i| match i {
                0..26 => ((b'a' + i as u8) as char).to_string(),
                _ => format!("v{}", i),
            })
            .collect::<Vec<_>>();
        (0..2)
            .flat_map(|t| names.iter().map(move |name| Self::new(name.clone(), t)))
            .collect()
    }
}

/// "at" at t, "at+k" at t+k
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.time_step {
            0 => write!(f, "{}t", self.name),
            k => write!(f, "{}t+{}", self.name, k),
        }
    }
}

impl From<&Node> for Label {
    fn from(node: &Node) -> Self {
        Label::leaf(node.to_string())
    }
}
impl From<Node> for Label {
    fn from(node: Node) -> Self {
        Label::from(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEMO_NODES;

    #[test]
    fn system_of_two_is_demo() {
        let names = Node::system(2)
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, DEMO_NODES);
    }

    #[test]
    fn large_systems_stay_unique() {
        let nodes = Node::system(30);
        assert_eq!(nodes.len(), 60);
        assert_eq!(nodes[29].to_string(), "v29t");
        assert_eq!(nodes[59].to_string(), "v29t+1");
        assert!(crate::partition::Universe::new(nodes).is_ok());
    }

    #[test]
    fn deserializes_stored_shape() {
        let node = serde_json::from_str::<Node>(r#"{"name":"a","time_step":1}"#).unwrap();
        assert_eq!(node, Node::new("a", 1));
        assert_eq!(Label::from(node), Label::from("at+1"));
    }
}
