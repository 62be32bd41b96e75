//! Capability traits the evolution engine is written against.
//!
//! The engine never looks inside an individual: it scores it through
//! [`Individual`], and creates, recombines and perturbs individuals through
//! [`GeneticOperators`]. `ExpressionTree` and `TreeOperators` are the crate's
//! own implementation; tests plug in stubs.

use crate::error::Result;
use rand::Rng;

/// One candidate program. Immutable once created.
pub trait Individual: Send + Sync {
    /// Numeric output at `(x, y)`. Non-finite values are returned, not clamped;
    /// `Err` is reserved for faults in the individual itself.
    fn evaluate(&self, x: f64, y: f64) -> Result<f64>;

    /// Finite textual form used for reporting
    fn render(&self) -> String;

    /// Structural size used by the complexity penalty
    fn size(&self) -> usize {
        self.render().len()
    }
}

/// Construction, crossover and mutation of individuals.
///
/// Inputs are borrowed immutably; every operation returns a new individual.
pub trait GeneticOperators {
    type Individual: Individual + Clone;

    fn random_tree<R: Rng>(&self, max_depth: usize, rng: &mut R) -> Result<Self::Individual>;

    fn breed<R: Rng>(
        &self,
        parent_a: &Self::Individual,
        parent_b: &Self::Individual,
        rng: &mut R,
    ) -> Result<Self::Individual>;

    fn mutate<R: Rng>(&self, individual: &Self::Individual, rng: &mut R) -> Result<Self::Individual>;
}
