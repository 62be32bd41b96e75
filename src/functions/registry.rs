use crate::error::{Result, SymregError};
use crate::functions::{
    primitives::{Abs, Add, Cos, Div, Exp, Max, Mul, Neg, Sin, Sqr, Sub},
    traits::Primitive,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::{collections::HashMap, sync::Arc};

/// Function set available to tree construction and mutation.
///
/// Keeps registration order so random choices are reproducible for a given seed.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn Primitive>>,
    order: Vec<Arc<dyn Primitive>>,
}

impl FunctionRegistry {
    /// Registry with every built-in primitive
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_primitives();
        registry
    }

    pub fn empty() -> Self {
        Self {
            functions: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Registry restricted to the named primitives, in the given order
    pub fn with_functions(names: &[String]) -> Result<Self> {
        let full = Self::new();
        let mut registry = Self::empty();
        for name in names {
            let primitive = full.get_primitive(name).ok_or_else(|| {
                SymregError::Configuration(format!("Unknown primitive '{}'", name))
            })?;
            registry.register(primitive);
        }
        if registry.is_empty() {
            return Err(SymregError::Configuration(
                "Function set must contain at least one primitive".to_string(),
            ));
        }
        Ok(registry)
    }

    pub fn register(&mut self, primitive: Arc<dyn Primitive>) {
        let alias = primitive.alias().to_string();
        if self.functions.insert(alias, Arc::clone(&primitive)).is_none() {
            self.order.push(primitive);
        }
    }

    pub fn get_primitive(&self, name: &str) -> Option<Arc<dyn Primitive>> {
        self.functions.get(name).cloned()
    }

    pub fn get_by_arity(&self, arity: usize) -> Vec<Arc<dyn Primitive>> {
        self.order
            .iter()
            .filter(|p| p.arity() == arity)
            .cloned()
            .collect()
    }

    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<Arc<dyn Primitive>> {
        self.order.choose(rng).cloned()
    }

    pub fn aliases(&self) -> Vec<&'static str> {
        self.order.iter().map(|p| p.alias()).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn register_primitives(&mut self) {
        let primitives: Vec<Arc<dyn Primitive>> = vec![
            Arc::new(Add),
            Arc::new(Sub),
            Arc::new(Mul),
            Arc::new(Div),
            Arc::new(Neg),
            Arc::new(Sqr),
            Arc::new(Abs),
            Arc::new(Max),
            Arc::new(Sin),
            Arc::new(Cos),
            Arc::new(Exp),
        ];
        for primitive in primitives {
            self.register(primitive);
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_primitive_retrieval() {
        let registry = FunctionRegistry::new();
        let mul = registry.get_primitive("mul");
        assert!(mul.is_some());
        assert_eq!(mul.unwrap().arity(), 2);
    }

    #[test]
    fn test_primitive_not_found() {
        let registry = FunctionRegistry::new();
        assert!(registry.get_primitive("NonExistent").is_none());
    }

    #[test]
    fn test_with_functions_keeps_order() {
        let names = vec!["mul".to_string(), "add".to_string()];
        let registry = FunctionRegistry::with_functions(&names).unwrap();
        assert_eq!(registry.aliases(), vec!["mul", "add"]);
        assert_eq!(registry.get_by_arity(1).len(), 0);
    }

    #[test]
    fn test_with_functions_rejects_unknown_and_empty() {
        assert!(FunctionRegistry::with_functions(&["pow".to_string()]).is_err());
        assert!(FunctionRegistry::with_functions(&[]).is_err());
    }

    #[test]
    fn test_square_abs_max_are_registered() {
        let names: Vec<String> = ["sqr", "abs", "max"].iter().map(|s| s.to_string()).collect();
        let registry = FunctionRegistry::with_functions(&names).unwrap();
        assert_eq!(registry.aliases(), vec!["sqr", "abs", "max"]);
        assert_eq!(registry.get_by_arity(1).len(), 2);
        assert_eq!(registry.get_by_arity(2).len(), 1);
    }
}
