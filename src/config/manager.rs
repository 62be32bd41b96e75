use super::{
    evolution::EvolutionConfig,
    expression::ExpressionConfig,
    sampling::SamplingConfig,
    traits::{ConfigManifest, ConfigSection},
};
use crate::error::{Result, SymregError};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `SYMREG__EVOLUTION__POPULATION_SIZE=200`
pub const ENV_PREFIX: &str = "SYMREG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub sampling: SamplingConfig,
    pub expression: ExpressionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.evolution.validate()?;
        self.sampling.validate()?;
        self.expression.validate()?;
        if self.expression.max_offspring_depth < self.evolution.max_tree_depth {
            return Err(SymregError::Configuration(format!(
                "Max offspring depth ({}) must be at least the initial tree depth ({})",
                self.expression.max_offspring_depth, self.evolution.max_tree_depth
            )));
        }
        Ok(())
    }

    pub fn manifests(&self) -> Vec<ConfigManifest> {
        vec![
            self.evolution.to_manifest(),
            self.sampling.to_manifest(),
            self.expression.to_manifest(),
        ]
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Defaults, then the TOML file, then `SYMREG__*` environment variables
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());
        let source = File::from(path).format(FileFormat::Toml);
        self.load_layered(source)
    }

    /// Same layering as `load_from_file` with inline TOML
    pub fn load_from_str(&mut self, contents: &str) -> Result<()> {
        self.load_layered(File::from_str(contents, FileFormat::Toml))
    }

    /// Defaults overridden by environment variables only
    pub fn load_from_env(&mut self) -> Result<()> {
        self.load_from_str("")
    }

    fn load_layered<S>(&mut self, file: S) -> Result<()>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("expression.functions")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.config)?)
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::target::BuiltinTarget;
    use crate::types::TiePolicy;

    #[test]
    fn test_load_partial_toml_keeps_defaults() {
        let mut manager = ConfigManager::new();
        manager
            .load_from_str(
                r#"
                [evolution]
                population_size = 40
                tie_policy = "first_wins"

                [sampling]
                target = "saddle"
                "#,
            )
            .unwrap();

        let config = manager.get();
        assert_eq!(config.evolution.population_size, 40);
        assert_eq!(config.evolution.tie_policy, TiePolicy::FirstWins);
        assert_eq!(config.evolution.num_epochs, 50);
        assert_eq!(config.sampling.target, BuiltinTarget::Saddle);
        assert_eq!(config.sampling.num_samples, 500);
    }

    #[test]
    fn test_invalid_file_leaves_config_untouched() {
        let mut manager = ConfigManager::new();
        let result = manager.load_from_str("[evolution]\npopulation_size = 7\n");
        assert!(result.is_err());
        assert_eq!(manager.get(), AppConfig::default());
    }

    #[test]
    fn test_update_validates() {
        let mut manager = ConfigManager::new();
        assert!(manager.update(|c| c.evolution.population_size = 3).is_err());
        assert_eq!(manager.get().evolution.population_size, 5000);
        manager.update(|c| c.evolution.population_size = 100).unwrap();
        assert_eq!(manager.get().evolution.population_size, 100);
    }

    #[test]
    fn test_offspring_depth_cross_check() {
        let mut manager = ConfigManager::new();
        let result = manager.update(|c| {
            c.evolution.max_tree_depth = 8;
            c.expression.max_offspring_depth = 4;
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip_through_manager() {
        let mut manager = ConfigManager::new();
        manager.update(|c| c.evolution.seed = Some(7)).unwrap();
        let text = manager.to_toml().unwrap();

        let mut reloaded = ConfigManager::new();
        reloaded.load_from_str(&text).unwrap();
        assert_eq!(reloaded.get().evolution.seed, Some(7));
    }
}
