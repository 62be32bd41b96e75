use anyhow::{Context, Result};
use std::env;
use symreg::config::ConfigManager;
use symreg::data::Sampler;
use symreg::engines::generation::{ConsoleProgressCallback, EvolutionEngine};

const USAGE: &str = "usage: symreg [CONFIG.toml | --print-config | --manifest]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut manager = ConfigManager::new();

    match args.get(1).map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("--print-config") => {
            manager.load_from_env()?;
            println!("{}", manager.to_toml()?);
            return Ok(());
        }
        Some("--manifest") => {
            println!("{}", serde_json::to_string_pretty(&manager.get().manifests())?);
            return Ok(());
        }
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => manager.load_from_env()?,
    }

    let config = manager.get();
    log::info!(
        "Learning {} with population {} over {} epochs",
        config.sampling.target.formula(),
        config.evolution.population_size,
        config.evolution.num_epochs
    );

    let sampler = Sampler::new(config.sampling.clone())?;
    let mut engine = EvolutionEngine::from_app_config(&config)?;
    let result = engine.run(&sampler, ConsoleProgressCallback)?;

    println!();
    println!("Best after {} epochs ({:?}):", result.epochs_completed, result.stop_reason);
    println!("  {}", result.best);
    println!("  score = {:.6}", result.best_score);
    Ok(())
}
