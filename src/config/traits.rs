use crate::error::SymregError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), SymregError>;
    fn to_manifest(&self) -> ConfigManifest;
}

/// Machine-readable description of a config section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigManifest {
    pub section: String,
    pub fields: Vec<FieldManifest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub field_type: String,
    pub default: serde_json::Value,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub description: String,
}

impl FieldManifest {
    pub fn new(
        name: &str,
        field_type: &str,
        default: serde_json::Value,
        min: Option<f64>,
        max: Option<f64>,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            default,
            min,
            max,
            description: description.to_string(),
        }
    }
}
