use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SymregError;
use crate::functions::FunctionRegistry;
use serde::{Deserialize, Serialize};

/// Shape of the expression trees produced by `TreeOperators`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionConfig {
    pub functions: Vec<String>,
    pub constant_min: f64,
    pub constant_max: f64,
    pub terminal_probability: f64,
    pub mutation_depth: usize,
    pub max_offspring_depth: usize,
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            functions: ["add", "sub", "mul", "div", "neg", "sin", "cos"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            constant_min: -1.0,
            constant_max: 1.0,
            terminal_probability: 0.3,
            mutation_depth: 2,
            max_offspring_depth: 12,
        }
    }
}

impl ConfigSection for ExpressionConfig {
    fn section_name() -> &'static str {
        "expression"
    }

    fn validate(&self) -> Result<(), SymregError> {
        FunctionRegistry::with_functions(&self.functions)?;
        if !self.constant_min.is_finite()
            || !self.constant_max.is_finite()
            || self.constant_min > self.constant_max
        {
            return Err(SymregError::Configuration(
                "Constant range must be finite and ordered".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.terminal_probability) {
            return Err(SymregError::Configuration(
                "Terminal probability must be between 0 and 1".to_string(),
            ));
        }
        if self.max_offspring_depth == 0 {
            return Err(SymregError::Configuration(
                "Max offspring depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Expression".to_string(),
            fields: vec![
                FieldManifest::new(
                    "functions",
                    "list",
                    serde_json::json!(defaults.functions),
                    None,
                    None,
                    "Primitive aliases: add, sub, mul, div, neg, sqr, abs, max, sin, cos, exp",
                ),
                FieldManifest::new("constant_min", "float", serde_json::json!(defaults.constant_min), None, None, "Lower bound of random constants"),
                FieldManifest::new("constant_max", "float", serde_json::json!(defaults.constant_max), None, None, "Upper bound of random constants"),
                FieldManifest::new(
                    "terminal_probability",
                    "float",
                    serde_json::json!(defaults.terminal_probability),
                    Some(0.0),
                    Some(1.0),
                    "Chance of stopping early when growing a random tree",
                ),
                FieldManifest::new(
                    "mutation_depth",
                    "integer",
                    serde_json::json!(defaults.mutation_depth),
                    Some(0.0),
                    None,
                    "Depth of subtrees inserted by mutation",
                ),
                FieldManifest::new(
                    "max_offspring_depth",
                    "integer",
                    serde_json::json!(defaults.max_offspring_depth),
                    Some(1.0),
                    None,
                    "Deeper crossover children fall back to the first parent",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_primitive_rejected() {
        let config = ExpressionConfig {
            functions: vec!["add".to_string(), "tanh".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_constant_range_must_be_ordered() {
        let config = ExpressionConfig {
            constant_min: 1.0,
            constant_max: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
