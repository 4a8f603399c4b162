mod coupling;
mod density;
mod distribution;
mod emd;
mod hungarian;
mod matrix;
mod measure;
mod support;

pub use coupling::*;
pub use density::*;
pub use distribution::*;
pub use emd::*;
pub use hungarian::*;
pub use matrix::*;
pub use measure::*;
pub use support::*;
