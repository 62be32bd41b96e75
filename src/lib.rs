//! Symbolic regression by generational tree-based genetic programming.
//!
//! A population of expression trees is scored against samples of a target
//! function (rmse plus a size penalty), thinned by one round of pairwise
//! tournaments, and rebuilt by crossover and mutation every epoch.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod functions;
pub mod types;

pub use error::{Result, SymregError};
