use crate::partition::Fault;
use crate::partition::Partition;
use crate::partition::Search;
use serde::Deserialize;
use serde::Serialize;

/// The optimal partition, optionally with every candidate the search recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(flatten)]
    pub optimal: Partition,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Partition>,
}

impl Response {
    pub fn optimal(search: &Search) -> Result<Self, Fault> {
        Ok(Self {
            optimal: search.optimal()?.clone(),
            candidates: Vec::new(),
        })
    }
    pub fn traced(search: &Search) -> Result<Self, Fault> {
        Ok(Self {
            candidates: search.partitions().to_vec(),
            ..Self::optimal(search)?
        })
    }
}
