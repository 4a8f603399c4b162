use super::candidate::Candidate;
use super::fault::Fault;
use super::label::Label;
use super::record::Partition;
use super::universe::Universe;
use crate::MIN_UNIVERSE;
use crate::transport::EMD;
use std::time::Duration;
use std::time::Instant;

/// Hierarchical merge search for a minimum transport-cost bipartition.
///
/// Each level finds a candidate pair, records the partition that isolates
/// the pair's last label, and merges the pair into one compound label. The
/// level shrinks by one until two labels remain. Partitions accumulate in
/// this value only; nothing is shared between searches.
#[derive(Debug, Clone)]
pub struct Search {
    current: Universe,
    partitions: Vec<Partition>,
    budget: Option<Duration>,
}

impl Search {
    pub fn new(universe: Universe) -> Self {
        Self {
            current: universe,
            partitions: Vec::new(),
            budget: None,
        }
    }
    /// fail with DeadlineExceeded if the search runs longer than `budget`
    pub fn budget(mut self, budget: Option<Duration>) -> Self {
        self.budget = budget;
        self
    }
    /// labels of the level the search stopped at
    pub fn current(&self) -> &Universe {
        &self.current
    }
    /// every recorded partition, in the order the levels produced them
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }
    /// cheapest recorded partition, earliest on ties
    pub fn optimal(&self) -> Result<&Partition, Fault> {
        self.partitions
            .iter()
            .min_by(|a, b| a.emd().total_cmp(&b.emd()))
            .ok_or(Fault::EmptyPartitionList {
                size: self.current.len(),
            })
    }

    /// run levels until two labels remain
    pub fn run(mut self) -> Result<Self, Fault> {
        let size = self.current.len();
        if size < MIN_UNIVERSE {
            return Err(Fault::InsufficientUniverse { size });
        }
        if size <= MIN_UNIVERSE {
            return Err(Fault::EmptyPartitionList { size });
        }
        let start = Instant::now();
        while self.current.len() > MIN_UNIVERSE {
            if self.budget.is_some_and(|budget| start.elapsed() >= budget) {
                log::warn!("search deadline reached at {}", self.current);
                return Err(Fault::DeadlineExceeded {
                    levels: self.partitions.len(),
                });
            }
            self.step()?;
        }
        log::debug!("search terminated at {}", self.current);
        Ok(self)
    }

    /// record one partition and merge the candidate pair
    fn step(&mut self) -> Result<(), Fault> {
        log::debug!("searching partitions of {}", self.current);
        let (a, b): (Label, Label) = Candidate::try_from(&self.current)
            .inspect(|candidate| log::debug!("candidate pair {}", candidate))?
            .into();
        let partition = self.isolate(&b);
        log::info!("candidate partition {}", partition);
        self.partitions.push(partition);
        self.current = self.current.merge(&a, &b);
        Ok(())
    }

    /// `label` alone against the rest of the current level
    fn isolate(&self, label: &Label) -> Partition {
        let single = vec![label.clone()];
        let rest = self.current.without(label);
        let emd = EMD::cost(&single, &rest, self.current.labels());
        Partition::new(single, rest, emd)
    }
}

impl From<Universe> for Search {
    fn from(universe: Universe) -> Self {
        Self::new(universe)
    }
}

/// Validate `nodes`, search, and return the cheapest partition found.
pub fn find_optimal_partition<I, S>(nodes: I) -> Result<Partition, Fault>
where
    I: IntoIterator<Item = S>,
    S: Into<Label>,
{
    Search::new(Universe::new(nodes)?)
        .run()?
        .optimal()
        .cloned()
}
