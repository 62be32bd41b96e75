use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::error::SymregError;
use crate::types::TiePolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_epochs: usize,
    pub max_tree_depth: usize,
    pub mutation_rate: f64,
    pub complexity_penalty: f64,
    pub tie_policy: TiePolicy,
    pub report_top_k: usize,
    pub parallel_evaluation: bool,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 5000,
            num_epochs: 50,
            max_tree_depth: 3,
            mutation_rate: 0.2,
            complexity_penalty: 0.001,
            tie_policy: TiePolicy::SecondWins,
            report_top_k: 10,
            parallel_evaluation: true,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SymregError> {
        if self.population_size < 2 {
            return Err(SymregError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(SymregError::Configuration(format!(
                "Population size must be even, got {}",
                self.population_size
            )));
        }
        if self.num_epochs == 0 {
            return Err(SymregError::Configuration(
                "Number of epochs must be positive".to_string(),
            ));
        }
        if self.max_tree_depth == 0 {
            return Err(SymregError::Configuration(
                "Max tree depth must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SymregError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if !self.complexity_penalty.is_finite() || self.complexity_penalty < 0.0 {
            return Err(SymregError::Configuration(
                "Complexity penalty must be finite and non-negative".to_string(),
            ));
        }
        if self.report_top_k == 0 {
            return Err(SymregError::Configuration(
                "Report size must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    serde_json::json!(defaults.population_size),
                    Some(2.0),
                    None,
                    "Number of individuals per epoch (even)",
                ),
                FieldManifest::new(
                    "num_epochs",
                    "integer",
                    serde_json::json!(defaults.num_epochs),
                    Some(1.0),
                    None,
                    "Number of evaluate/select/reproduce cycles",
                ),
                FieldManifest::new(
                    "max_tree_depth",
                    "integer",
                    serde_json::json!(defaults.max_tree_depth),
                    Some(1.0),
                    None,
                    "Maximum depth of the initial random trees",
                ),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    serde_json::json!(defaults.mutation_rate),
                    Some(0.0),
                    Some(1.0),
                    "Probability that an offspring is mutated",
                ),
                FieldManifest::new(
                    "complexity_penalty",
                    "float",
                    serde_json::json!(defaults.complexity_penalty),
                    Some(0.0),
                    None,
                    "Score added per unit of structural size",
                ),
                FieldManifest::new(
                    "tie_policy",
                    "enum",
                    serde_json::json!(defaults.tie_policy),
                    None,
                    None,
                    "Tournament winner on equal scores: second_wins or first_wins",
                ),
                FieldManifest::new(
                    "report_top_k",
                    "integer",
                    serde_json::json!(defaults.report_top_k),
                    Some(1.0),
                    None,
                    "Number of lowest scores reported each epoch",
                ),
                FieldManifest::new(
                    "parallel_evaluation",
                    "bool",
                    serde_json::json!(defaults.parallel_evaluation),
                    None,
                    None,
                    "Score individuals on the rayon thread pool",
                ),
                FieldManifest::new(
                    "seed",
                    "integer",
                    serde_json::Value::Null,
                    Some(0.0),
                    None,
                    "Random seed; entropy when absent",
                ),
            ],
        }
    }
}
