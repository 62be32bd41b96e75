use crate::functions::traits::Primitive;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Expression tree node, stored in prefix order inside an `ExpressionTree`
#[derive(Debug, Clone)]
pub enum Node {
    Const(f64),
    X,
    Y,
    Call(Arc<dyn Primitive>),
}

impl Node {
    /// Number of child nodes this node consumes
    pub fn arity(&self) -> usize {
        match self {
            Node::Const(_) | Node::X | Node::Y => 0,
            Node::Call(primitive) => primitive.arity(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.arity() == 0
    }
}

/// Single training input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

/// How tournaments resolve exactly equal scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiePolicy {
    /// The challenger from the second half wins (`a < b ? a : b`)
    #[default]
    SecondWins,
    FirstWins,
}

/// Summary of one completed epoch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochReport {
    pub epoch: usize,
    pub best_rendered: String,
    pub best_score: f64,
    /// Lowest scores of the epoch, ascending, NaN last
    pub lowest_scores: Vec<f64>,
    pub non_finite_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    Completed,
    Cancelled,
}
