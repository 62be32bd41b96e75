use crate::error::{Result, SymregError};
use crate::types::Node;

/// Expression tree stored as a flat prefix-ordered arena.
///
/// Every subtree occupies a contiguous range starting at its root, which keeps
/// crossover and subtree mutation to slice splicing.
#[derive(Debug, Clone)]
pub struct ExpressionTree {
    nodes: Vec<Node>,
}

impl ExpressionTree {
    /// Wraps raw prefix nodes without checking them; see `is_well_formed`
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Exactly one complete tree, nothing trailing
    pub fn is_well_formed(&self) -> bool {
        !self.nodes.is_empty() && matches!(self.subtree_end(0), Ok(end) if end == self.nodes.len())
    }

    /// Exclusive end index of the subtree rooted at `start`
    pub fn subtree_end(&self, start: usize) -> Result<usize> {
        let mut pending = 1usize;
        let mut i = start;
        while pending > 0 {
            let node = self.nodes.get(i).ok_or_else(|| {
                SymregError::Capability(format!(
                    "Truncated expression: subtree at {} runs past {} nodes",
                    start,
                    self.nodes.len()
                ))
            })?;
            pending = pending - 1 + node.arity();
            i += 1;
        }
        Ok(i)
    }

    /// Depth of the subtree rooted at `start`; a lone terminal has depth 0
    pub fn depth_at(&self, start: usize) -> Result<usize> {
        self.depth_and_end(start).map(|(depth, _)| depth)
    }

    pub fn depth(&self) -> Result<usize> {
        self.depth_at(0)
    }

    fn depth_and_end(&self, start: usize) -> Result<(usize, usize)> {
        let node = self.nodes.get(start).ok_or_else(|| {
            SymregError::Capability(format!("No node at index {}", start))
        })?;
        let mut next = start + 1;
        let mut deepest_child = None;
        for _ in 0..node.arity() {
            let (depth, end) = self.depth_and_end(next)?;
            deepest_child = Some(deepest_child.map_or(depth, |d: usize| d.max(depth)));
            next = end;
        }
        Ok((deepest_child.map_or(0, |d| d + 1), next))
    }

    /// New tree with `range` replaced by `replacement`
    pub fn splice(&self, range: std::ops::Range<usize>, replacement: &[Node]) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() - range.len() + replacement.len());
        nodes.extend_from_slice(&self.nodes[..range.start]);
        nodes.extend_from_slice(replacement);
        nodes.extend_from_slice(&self.nodes[range.end..]);
        Self { nodes }
    }

    /// Fully parenthesised infix text; missing children render as `?`
    pub fn to_formula(&self) -> String {
        if self.nodes.is_empty() {
            return "?".to_string();
        }
        self.render_at(0).0
    }

    fn render_at(&self, start: usize) -> (String, usize) {
        match self.nodes.get(start) {
            None => ("?".to_string(), start),
            Some(Node::Const(value)) => (format!("{:.5}", value), start + 1),
            Some(Node::X) => ("x".to_string(), start + 1),
            Some(Node::Y) => ("y".to_string(), start + 1),
            Some(Node::Call(primitive)) => {
                let mut next = start + 1;
                let mut args = Vec::with_capacity(primitive.arity());
                for _ in 0..primitive.arity() {
                    let (text, end) = self.render_at(next);
                    args.push(text);
                    next = end;
                }
                (primitive.render(&args), next)
            }
        }
    }
}

/// Shorten rendered text for log lines, keeping at most `max_len` characters
pub fn shorten_formula(formula: &str, max_len: usize) -> String {
    if formula.chars().count() <= max_len {
        formula.to_string()
    } else {
        let truncated: String = formula.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

impl std::fmt::Display for ExpressionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_formula())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::primitives::{Add, Mul, Sin};
    use std::sync::Arc;

    fn paraboloid() -> ExpressionTree {
        // ((x * x) + (y * y))
        ExpressionTree::from_nodes(vec![
            Node::Call(Arc::new(Add)),
            Node::Call(Arc::new(Mul)),
            Node::X,
            Node::X,
            Node::Call(Arc::new(Mul)),
            Node::Y,
            Node::Y,
        ])
    }

    #[test]
    fn test_render_and_depth() {
        let tree = paraboloid();
        assert_eq!(tree.to_formula(), "((x * x) + (y * y))");
        assert_eq!(tree.depth().unwrap(), 2);
        assert_eq!(tree.depth_at(4).unwrap(), 1);
        assert_eq!(tree.depth_at(5).unwrap(), 0);
    }

    #[test]
    fn test_subtree_ranges() {
        let tree = paraboloid();
        assert_eq!(tree.subtree_end(0).unwrap(), 7);
        assert_eq!(tree.subtree_end(1).unwrap(), 4);
        assert_eq!(tree.subtree_end(4).unwrap(), 7);
        assert_eq!(tree.subtree_end(6).unwrap(), 7);
    }

    #[test]
    fn test_well_formedness() {
        assert!(paraboloid().is_well_formed());
        let truncated = ExpressionTree::from_nodes(vec![Node::Call(Arc::new(Add)), Node::X]);
        assert!(!truncated.is_well_formed());
        assert!(truncated.subtree_end(0).is_err());
        assert_eq!(truncated.to_formula(), "(x + ?)");
        let trailing = ExpressionTree::from_nodes(vec![Node::X, Node::Y]);
        assert!(!trailing.is_well_formed());
    }

    #[test]
    fn test_splice_replaces_subtree() {
        let tree = paraboloid();
        let replaced = tree.splice(4..7, &[Node::Call(Arc::new(Sin)), Node::Const(0.5)]);
        assert_eq!(replaced.to_formula(), "((x * x) + sin(0.50000))");
        // source tree is unchanged
        assert_eq!(tree.to_formula(), "((x * x) + (y * y))");
    }

    #[test]
    fn test_shorten_formula() {
        let formula = paraboloid().to_formula();
        assert_eq!(shorten_formula(&formula, 10), "((x * x...");
        assert_eq!(shorten_formula(&formula, 64), formula);
    }

    #[test]
    fn test_constants_render_with_five_decimals() {
        let tree = ExpressionTree::from_nodes(vec![Node::Const(-0.25)]);
        assert_eq!(tree.to_formula(), "-0.25000");
    }
}
