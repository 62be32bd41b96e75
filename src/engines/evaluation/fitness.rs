//! Scoring of individuals against the training set.
//!
//! Score = root-mean-square error + `complexity_penalty * size`. Lower is
//! better. Non-finite outputs flow straight into the score so degenerate
//! individuals lose their tournaments instead of being clamped.

use crate::data::{target::TargetFunction, TrainingSet};
use crate::engines::generation::individual::Individual;
use crate::error::Result;
use rayon::prelude::*;
use std::cmp::Ordering;

pub struct FitnessEvaluator<T: TargetFunction> {
    target: T,
    complexity_penalty: f64,
}

impl<T: TargetFunction> FitnessEvaluator<T> {
    pub fn new(target: T, complexity_penalty: f64) -> Self {
        Self {
            target,
            complexity_penalty,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn complexity_penalty(&self) -> f64 {
        self.complexity_penalty
    }

    pub fn rmse<I: Individual + ?Sized>(&self, individual: &I, training: &TrainingSet) -> Result<f64> {
        let mut sum = 0.0;
        for point in training.points() {
            let error = self.target.value(point.x, point.y) - individual.evaluate(point.x, point.y)?;
            sum += error * error;
        }
        Ok((sum / training.len() as f64).sqrt())
    }

    pub fn penalty<I: Individual + ?Sized>(&self, individual: &I) -> f64 {
        self.complexity_penalty * individual.size() as f64
    }

    pub fn score<I: Individual + ?Sized>(&self, individual: &I, training: &TrainingSet) -> Result<f64> {
        Ok(self.rmse(individual, training)? + self.penalty(individual))
    }

    /// Scores for the whole population, index-aligned with it.
    ///
    /// Returns only once every score is final; the first error aborts.
    pub fn evaluate_population<I: Individual>(
        &self,
        population: &[I],
        training: &TrainingSet,
        parallel: bool,
    ) -> Result<Vec<f64>> {
        if parallel {
            population
                .par_iter()
                .map(|individual| self.score(individual, training))
                .collect()
        } else {
            population
                .iter()
                .map(|individual| self.score(individual, training))
                .collect()
        }
    }
}

/// Ascending score order with NaN after every number
pub fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Index of the lowest score; the first one on ties
pub fn best_index(scores: &[f64]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .min_by(|(i, a), (j, b)| compare_scores(**a, **b).then(i.cmp(j)))
        .map(|(i, _)| i)
}

/// The `k` lowest scores in ascending order
pub fn lowest_scores(scores: &[f64], k: usize) -> Vec<f64> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| compare_scores(*a, *b));
    sorted.truncate(k);
    sorted
}
