use crate::config::{AppConfig, EvolutionConfig};
use crate::config::traits::ConfigSection;
use crate::data::{target::TargetFunction, BuiltinTarget, Sampler, TrainingSet};
use crate::engines::evaluation::fitness::{best_index, lowest_scores, FitnessEvaluator};
use crate::engines::generation::{
    ast::shorten_formula,
    individual::{GeneticOperators, Individual},
    operators::TreeOperators,
    progress::ProgressCallback,
    reproduction::reproduce,
    selection::tournament_selection,
};
use crate::error::{Result, SymregError};
use crate::types::{EpochReport, StopReason};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const LOG_FORMULA_LEN: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Initializing,
    Running { epoch: usize },
    Terminated,
}

/// Outcome of a run: the best individual of the last completed epoch
#[derive(Debug, Clone)]
pub struct EvolutionResult<I> {
    pub best: I,
    pub best_score: f64,
    pub epochs_completed: usize,
    pub stop_reason: StopReason,
    pub history: Vec<EpochReport>,
    pub final_population: Vec<I>,
}

pub struct EvolutionEngine<G, T>
where
    G: GeneticOperators,
    T: TargetFunction,
{
    config: EvolutionConfig,
    operators: G,
    evaluator: FitnessEvaluator<T>,
    rng: StdRng,
    state: EngineState,
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl<G, T> EvolutionEngine<G, T>
where
    G: GeneticOperators,
    T: TargetFunction,
{
    pub fn new(config: EvolutionConfig, operators: G, target: T) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let evaluator = FitnessEvaluator::new(target, config.complexity_penalty);

        Ok(Self {
            config,
            operators,
            evaluator,
            rng,
            state: EngineState::Initializing,
            cancel_flag: None,
        })
    }

    /// Flag polled once per epoch boundary; setting it ends the run early
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &FitnessEvaluator<T> {
        &self.evaluator
    }

    /// Draw the training set with the engine's generator, then run
    pub fn run<C: ProgressCallback>(
        &mut self,
        sampler: &Sampler,
        callback: C,
    ) -> Result<EvolutionResult<G::Individual>> {
        self.state = EngineState::Initializing;
        let training = sampler.sample(&mut self.rng)?;
        log::info!("Sampled {} training points", training.len());
        self.run_on(&training, callback)
    }

    /// Run against a caller-provided training set
    pub fn run_on<C: ProgressCallback>(
        &mut self,
        training: &TrainingSet,
        callback: C,
    ) -> Result<EvolutionResult<G::Individual>> {
        self.state = EngineState::Initializing;
        let result = self.run_epochs(training, callback);
        self.state = EngineState::Terminated;
        result
    }

    fn run_epochs<C: ProgressCallback>(
        &mut self,
        training: &TrainingSet,
        mut callback: C,
    ) -> Result<EvolutionResult<G::Individual>> {
        let mut population = self.initialize_population()?;
        let mut history = Vec::with_capacity(self.config.num_epochs);
        let mut best: Option<(G::Individual, f64)> = None;
        let mut stop_reason = StopReason::Completed;

        for epoch in 0..self.config.num_epochs {
            if self.is_cancelled() {
                log::warn!("Cancellation requested, stopping before epoch {}", epoch);
                stop_reason = StopReason::Cancelled;
                break;
            }
            self.state = EngineState::Running { epoch };
            callback.on_epoch_start(epoch);

            let scores = self.evaluator.evaluate_population(
                &population,
                training,
                self.config.parallel_evaluation,
            )?;

            let best_idx = best_index(&scores).ok_or_else(|| {
                SymregError::Configuration("Population is empty".to_string())
            })?;
            let report = EpochReport {
                epoch,
                best_rendered: population[best_idx].render(),
                best_score: scores[best_idx],
                lowest_scores: lowest_scores(&scores, self.config.report_top_k),
                non_finite_count: scores.iter().filter(|s| !s.is_finite()).count(),
            };

            log::info!(
                "Epoch {}: best score {:.6} {}",
                epoch,
                report.best_score,
                shorten_formula(&report.best_rendered, LOG_FORMULA_LEN)
            );
            if report.non_finite_count > 0 {
                log::debug!(
                    "Epoch {}: {} individuals with non-finite scores",
                    epoch,
                    report.non_finite_count
                );
            }

            callback.on_epoch_complete(&report);
            best = Some((population[best_idx].clone(), scores[best_idx]));
            history.push(report);

            let winners =
                tournament_selection(&population, &scores, self.config.tie_policy, &mut self.rng)?;
            population = reproduce(
                &self.operators,
                &winners,
                self.config.population_size,
                self.config.mutation_rate,
                &mut self.rng,
            )?;
        }

        let (best, best_score) = best.ok_or_else(|| {
            SymregError::Cancelled("no epoch completed".to_string())
        })?;

        Ok(EvolutionResult {
            best,
            best_score,
            epochs_completed: history.len(),
            stop_reason,
            history,
            final_population: population,
        })
    }

    fn initialize_population(&mut self) -> Result<Vec<G::Individual>> {
        (0..self.config.population_size)
            .map(|_| {
                self.operators
                    .random_tree(self.config.max_tree_depth, &mut self.rng)
            })
            .collect()
    }

    fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

impl EvolutionEngine<TreeOperators, BuiltinTarget> {
    /// Engine over expression trees for a validated application config
    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let operators = TreeOperators::new(config.expression.clone())?;
        Self::new(config.evolution.clone(), operators, config.sampling.target)
    }
}
