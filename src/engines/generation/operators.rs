use crate::config::ExpressionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::generation::{ast::ExpressionTree, individual::GeneticOperators};
use crate::error::{Result, SymregError};
use crate::functions::FunctionRegistry;
use crate::types::Node;
use rand::Rng;
use std::sync::Arc;

/// Fraction of the constant range used as the maximum perturbation step
const CONSTANT_STEP: f64 = 0.1;

/// Random construction, subtree crossover and mutation of `ExpressionTree`s
#[derive(Debug, Clone)]
pub struct TreeOperators {
    registry: FunctionRegistry,
    config: ExpressionConfig,
}

impl TreeOperators {
    pub fn new(config: ExpressionConfig) -> Result<Self> {
        config.validate()?;
        let registry = FunctionRegistry::with_functions(&config.functions)?;
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    /// Grow method: terminals are forced at depth 0, otherwise taken with
    /// `terminal_probability`
    fn grow<R: Rng>(&self, depth: usize, rng: &mut R, out: &mut Vec<Node>) {
        if depth == 0 || rng.gen::<f64>() < self.config.terminal_probability {
            out.push(self.random_terminal(rng));
            return;
        }
        match self.registry.choose(rng) {
            Some(primitive) => {
                let arity = primitive.arity();
                out.push(Node::Call(primitive));
                for _ in 0..arity {
                    self.grow(depth - 1, rng, out);
                }
            }
            None => out.push(self.random_terminal(rng)),
        }
    }

    fn random_terminal<R: Rng>(&self, rng: &mut R) -> Node {
        match rng.gen_range(0..3) {
            0 => Node::X,
            1 => Node::Y,
            _ => Node::Const(self.random_constant(rng)),
        }
    }

    fn random_constant<R: Rng>(&self, rng: &mut R) -> f64 {
        let (min, max) = (self.config.constant_min, self.config.constant_max);
        min + rng.gen::<f64>() * (max - min)
    }

    fn check_well_formed(tree: &ExpressionTree, role: &str) -> Result<()> {
        if tree.is_well_formed() {
            Ok(())
        } else {
            Err(SymregError::Capability(format!(
                "Malformed {} with {} nodes",
                role,
                tree.len()
            )))
        }
    }

    /// Children deeper than `max_offspring_depth` are replaced by `fallback`
    fn within_depth_limit(&self, child: ExpressionTree, fallback: &ExpressionTree) -> Result<ExpressionTree> {
        if child.depth()? > self.config.max_offspring_depth {
            log::trace!(
                "Offspring exceeds depth {}, keeping parent",
                self.config.max_offspring_depth
            );
            Ok(fallback.clone())
        } else {
            Ok(child)
        }
    }

    fn replace_subtree<R: Rng>(
        &self,
        tree: &ExpressionTree,
        index: usize,
        rng: &mut R,
    ) -> Result<ExpressionTree> {
        let end = tree.subtree_end(index)?;
        let mut replacement = Vec::new();
        self.grow(self.config.mutation_depth, rng, &mut replacement);
        Ok(tree.splice(index..end, &replacement))
    }
}

impl GeneticOperators for TreeOperators {
    type Individual = ExpressionTree;

    fn random_tree<R: Rng>(&self, max_depth: usize, rng: &mut R) -> Result<ExpressionTree> {
        let mut nodes = Vec::new();
        self.grow(max_depth, rng, &mut nodes);
        Ok(ExpressionTree::from_nodes(nodes))
    }

    /// Replace a random subtree of `parent_a` by a random subtree of `parent_b`
    fn breed<R: Rng>(
        &self,
        parent_a: &ExpressionTree,
        parent_b: &ExpressionTree,
        rng: &mut R,
    ) -> Result<ExpressionTree> {
        Self::check_well_formed(parent_a, "first parent")?;
        Self::check_well_formed(parent_b, "second parent")?;

        let cut_a = rng.gen_range(0..parent_a.len());
        let cut_b = rng.gen_range(0..parent_b.len());
        let end_a = parent_a.subtree_end(cut_a)?;
        let end_b = parent_b.subtree_end(cut_b)?;

        let child = parent_a.splice(cut_a..end_a, &parent_b.nodes()[cut_b..end_b]);
        self.within_depth_limit(child, parent_a)
    }

    /// Perturb a constant, swap a primitive for one of equal arity, or regrow a subtree
    fn mutate<R: Rng>(&self, individual: &ExpressionTree, rng: &mut R) -> Result<ExpressionTree> {
        Self::check_well_formed(individual, "mutation input")?;

        let index = rng.gen_range(0..individual.len());
        let point_mutation = rng.gen_bool(0.5);

        let mutated = match &individual.nodes()[index] {
            Node::Const(value) if point_mutation => {
                let span = (self.config.constant_max - self.config.constant_min).max(1.0);
                let step = (rng.gen::<f64>() * 2.0 - 1.0) * CONSTANT_STEP * span;
                individual.splice(index..index + 1, &[Node::Const(value + step)])
            }
            Node::Call(primitive) if point_mutation => {
                let alternatives: Vec<_> = self
                    .registry
                    .get_by_arity(primitive.arity())
                    .into_iter()
                    .filter(|p| p.alias() != primitive.alias())
                    .collect();
                if alternatives.is_empty() {
                    self.replace_subtree(individual, index, rng)?
                } else {
                    let swapped = Arc::clone(&alternatives[rng.gen_range(0..alternatives.len())]);
                    individual.splice(index..index + 1, &[Node::Call(swapped)])
                }
            }
            _ => self.replace_subtree(individual, index, rng)?,
        };

        self.within_depth_limit(mutated, individual)
    }
}
