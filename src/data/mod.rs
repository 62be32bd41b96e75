pub mod sampler;
pub mod target;

pub use sampler::{Sampler, TrainingSet};
pub use target::{BuiltinTarget, TargetFunction};
