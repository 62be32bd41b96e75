use crate::config::SamplingConfig;
use crate::config::traits::ConfigSection;
use crate::error::{Result, SymregError};
use crate::types::SamplePoint;
use rand::Rng;

/// Fixed set of training inputs, drawn once per run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    points: Vec<SamplePoint>,
}

impl TrainingSet {
    pub fn from_points(points: Vec<SamplePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(SymregError::Configuration(
                "Training set must contain at least one point".to_string(),
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Draws training points uniformly from the configured rectangle
pub struct Sampler {
    config: SamplingConfig,
}

impl Sampler {
    pub fn new(config: SamplingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<TrainingSet> {
        let c = &self.config;
        let points = (0..c.num_samples)
            .map(|_| SamplePoint {
                x: uniform(c.x_min, c.x_max, rng),
                y: uniform(c.y_min, c.y_max, rng),
            })
            .collect();
        TrainingSet::from_points(points)
    }
}

fn uniform<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}
