use crate::engines::generation::{ast::ExpressionTree, individual::Individual};
use crate::error::{Result, SymregError};
use crate::types::Node;

impl ExpressionTree {
    /// Evaluate at one point by a reverse sweep over the prefix nodes.
    ///
    /// The value stack holds arguments with the first argument on top, so a call
    /// reverses its tail in place before executing.
    pub fn evaluate_at(&self, x: f64, y: f64) -> Result<f64> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.len());

        for (index, node) in self.nodes().iter().enumerate().rev() {
            match node {
                Node::Const(value) => stack.push(*value),
                Node::X => stack.push(x),
                Node::Y => stack.push(y),
                Node::Call(primitive) => {
                    let arity = primitive.arity();
                    if stack.len() < arity {
                        return Err(SymregError::Capability(format!(
                            "'{}' at node {} needs {} arguments, {} available",
                            primitive.alias(),
                            index,
                            arity,
                            stack.len()
                        )));
                    }
                    let start = stack.len() - arity;
                    stack[start..].reverse();
                    let value = primitive.execute(&stack[start..]);
                    stack.truncate(start);
                    stack.push(value);
                }
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(SymregError::Capability(format!(
                "Malformed expression leaves {} values on the stack",
                stack.len()
            ))),
        }
    }
}

impl Individual for ExpressionTree {
    fn evaluate(&self, x: f64, y: f64) -> Result<f64> {
        self.evaluate_at(x, y)
    }

    fn render(&self) -> String {
        self.to_formula()
    }
}
