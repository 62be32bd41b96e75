pub mod traits;
pub mod evolution;
pub mod sampling;
pub mod expression;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::EvolutionConfig;
pub use sampling::SamplingConfig;
pub use expression::ExpressionConfig;
