pub mod expression;
pub mod fitness;

pub use fitness::{best_index, compare_scores, lowest_scores, FitnessEvaluator};
