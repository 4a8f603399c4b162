use super::candidate::Candidate;
use super::fault::Fault;
use super::gain::Gain;
use super::label::Label;
use super::universe::Universe;
use crate::Energy;
use crate::MIN_UNIVERSE;

/// Greedy ordering of a universe by marginal transport cost.
///
/// Starting from the first label, each step appends the remaining label
/// with the strictly smallest `g(built ∪ {u}) - g({u})`. Ties go to the
/// earliest label in universe order. The final step always scores `+∞`
/// (its union exhausts the universe), so it takes the one label left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<Label>);

impl Sequence {
    pub fn labels(&self) -> &[Label] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// the last two labels appended
    pub fn candidate(&self) -> Candidate {
        match self.0.as_slice() {
            [.., a, b] => Candidate::from((a.clone(), b.clone())),
            _ => unreachable!("sequences hold at least {} labels", MIN_UNIVERSE),
        }
    }

    /// index into `remaining` of the first strict minimizer
    fn argmin(gain: &Gain<'_>, built: &[&Label], remaining: &[&Label]) -> usize {
        remaining
            .iter()
            .map(|node| gain.marginal(built, node))
            .enumerate()
            .fold(None::<(usize, Energy)>, |best, (k, score)| match best {
                Some((_, min)) if min <= score => best,
                _ => Some((k, score)),
            })
            .map(|(k, _)| k)
            .unwrap_or(0)
    }
}

impl TryFrom<&Universe> for Sequence {
    type Error = Fault;
    fn try_from(universe: &Universe) -> Result<Self, Self::Error> {
        if universe.len() < MIN_UNIVERSE {
            return Err(Fault::InsufficientUniverse {
                size: universe.len(),
            });
        }
        let ref gain = Gain::from(universe);
        let mut built = vec![&universe[0]];
        let mut remaining = universe.iter().skip(1).collect::<Vec<_>>();
        while !remaining.is_empty() {
            let k = Self::argmin(gain, &built, &remaining);
            built.push(remaining.remove(k));
        }
        log::trace!(
            "greedy sequence {}",
            built.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(" -> ")
        );
        Ok(Self(built.into_iter().cloned().collect()))
    }
}

impl TryFrom<&Universe> for Candidate {
    type Error = Fault;
    fn try_from(universe: &Universe) -> Result<Self, Self::Error> {
        Sequence::try_from(universe).map(|sequence| sequence.candidate())
    }
}
