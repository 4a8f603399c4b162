use crate::MIN_UNIVERSE;

/// Precondition failures of the partition search.
///
/// All of these are detected before any partition is recorded, so a failed
/// search never leaks partial results. Degenerate (empty-sided) splits are
/// not faults: they score `+∞` and simply never win a minimization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    #[error("universe of {size} labels cannot be bisected (need at least {min})", min = MIN_UNIVERSE)]
    InsufficientUniverse { size: usize },
    #[error("no partition found: universe of {size} labels terminates before any split")]
    EmptyPartitionList { size: usize },
    #[error("duplicate label in universe: {0}")]
    DuplicateLabel(String),
    #[error("deadline exceeded after {levels} levels")]
    DeadlineExceeded { levels: usize },
}
