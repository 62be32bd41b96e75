pub mod ast;
pub mod individual;
pub mod operators;
pub mod selection;
pub mod reproduction;
pub mod evolution_engine;
pub mod progress;

pub use ast::ExpressionTree;
pub use individual::{GeneticOperators, Individual};
pub use operators::TreeOperators;
pub use selection::tournament_selection;
pub use reproduction::reproduce;
pub use evolution_engine::{EngineState, EvolutionEngine, EvolutionResult};
pub use progress::{
    ChannelProgressCallback, ConsoleProgressCallback, ProgressCallback, ProgressMessage,
    SilentProgressCallback,
};
