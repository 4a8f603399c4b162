use crate::partition::Fault;
use crate::partition::Universe;
use crate::DEMO_NODES;
use serde::Deserialize;
use serde::Serialize;

/// Body of a find-optimal-partition call: the initial universe, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub nodes: Vec<String>,
}

impl Request {
    pub fn universe(&self) -> Result<Universe, Fault> {
        Universe::new(self.nodes.iter().map(String::as_str))
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            nodes: DEMO_NODES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
