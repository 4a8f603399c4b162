mod candidate;
mod fault;
mod gain;
mod label;
mod record;
mod search;
mod sequence;
mod universe;

pub use candidate::*;
pub use fault::*;
pub use gain::*;
pub use label::*;
pub use record::*;
pub use search::*;
pub use sequence::*;
pub use universe::*;

#[cfg(test)]
mod tests;
