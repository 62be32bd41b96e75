use super::traits::{ConfigManifest, ConfigSection, FieldManifest};
use crate::data::target::BuiltinTarget;
use crate::error::SymregError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub num_samples: usize,
    pub target: BuiltinTarget,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
            num_samples: 500,
            target: BuiltinTarget::Paraboloid,
        }
    }
}

impl ConfigSection for SamplingConfig {
    fn section_name() -> &'static str {
        "sampling"
    }

    fn validate(&self) -> Result<(), SymregError> {
        let bounds = [self.x_min, self.x_max, self.y_min, self.y_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(SymregError::Configuration(
                "Sampling bounds must be finite".to_string(),
            ));
        }
        if self.x_min > self.x_max {
            return Err(SymregError::Configuration(format!(
                "x_min ({}) must not exceed x_max ({})",
                self.x_min, self.x_max
            )));
        }
        if self.y_min > self.y_max {
            return Err(SymregError::Configuration(format!(
                "y_min ({}) must not exceed y_max ({})",
                self.y_min, self.y_max
            )));
        }
        if self.num_samples == 0 {
            return Err(SymregError::Configuration(
                "Number of training samples must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        let defaults = Self::default();
        ConfigManifest {
            section: "Sampling".to_string(),
            fields: vec![
                FieldManifest::new("x_min", "float", serde_json::json!(defaults.x_min), None, None, "Lower bound of x"),
                FieldManifest::new("x_max", "float", serde_json::json!(defaults.x_max), None, None, "Upper bound of x"),
                FieldManifest::new("y_min", "float", serde_json::json!(defaults.y_min), None, None, "Lower bound of y"),
                FieldManifest::new("y_max", "float", serde_json::json!(defaults.y_max), None, None, "Upper bound of y"),
                FieldManifest::new(
                    "num_samples",
                    "integer",
                    serde_json::json!(defaults.num_samples),
                    Some(1.0),
                    None,
                    "Number of training points drawn once per run",
                ),
                FieldManifest::new(
                    "target",
                    "enum",
                    serde_json::json!(defaults.target),
                    None,
                    None,
                    "Function to learn: paraboloid, saddle, ripple, product, rational",
                ),
            ],
        }
    }
}
