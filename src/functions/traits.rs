use std::fmt::Debug;

/// Base trait for all expression primitives
pub trait Primitive: Send + Sync + Debug {
    /// Alias used in configuration and the registry
    fn alias(&self) -> &'static str;

    /// Number of arguments
    fn arity(&self) -> usize;

    /// Apply to already evaluated arguments. Non-finite results are returned as-is.
    fn execute(&self, args: &[f64]) -> f64;

    /// Render as infix text given rendered arguments
    fn render(&self, args: &[String]) -> String;
}
