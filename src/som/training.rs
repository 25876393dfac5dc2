//! SOM training: the annealing schedule and the online training loop.
//!
//! Training makes a fixed number of passes over the samples. The learning
//! rate starts at [`ALPHA_START`] and drops by [`ALPHA_STEP`] after every
//! pass until it is no longer above `alpha_min`. The neighborhood radius
//! starts at a quarter of the chain length and shrinks by one node every
//! [`RADIUS_DECAY_INTERVAL`] passes, but never below one.

use crate::config::SomConfig;
use crate::error::{Result, TracerError};
use crate::som::map::{
    evaluate_distances_into, evaluate_distances_parallel, locate_bmu, update_neighborhood,
    update_neighborhood_parallel,
};
use crate::som::Matrix;
use log::{debug, info};

/// Learning rate of the first pass.
pub const ALPHA_START: f64 = 1.0;

/// Amount subtracted from the learning rate after each pass.
pub const ALPHA_STEP: f64 = 0.01;

/// The radius shrinks after every pass whose index is a multiple of this.
pub const RADIUS_DECAY_INTERVAL: usize = 10;

/// Training state for a single pass over the samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epoch {
    /// Zero-based pass index.
    pub iteration: usize,
    /// Learning rate used for this pass.
    pub alpha: f64,
    /// Neighborhood radius used for this pass.
    pub radius: usize,
}

/// Iterator over the passes of one training run.
///
/// The alpha sequence is produced by repeated subtraction, so
/// `alpha_min = 0.1` gives 90 passes and `alpha_min = 0.01` gives 99.
#[derive(Debug, Clone)]
pub struct AnnealingSchedule {
    alpha: f64,
    alpha_min: f64,
    radius: usize,
    iteration: usize,
}

impl AnnealingSchedule {
    /// Creates the schedule for a chain of `num_nodes` nodes.
    pub fn new(num_nodes: usize, alpha_min: f64) -> Self {
        Self {
            alpha: ALPHA_START,
            alpha_min,
            radius: num_nodes >> 2,
            iteration: 0,
        }
    }

    /// The radius the next pass will use.
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// The learning rate the next pass will use.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl Iterator for AnnealingSchedule {
    type Item = Epoch;

    fn next(&mut self) -> Option<Epoch> {
        if !(self.alpha > self.alpha_min) {
            return None;
        }

        let epoch = Epoch {
            iteration: self.iteration,
            alpha: self.alpha,
            radius: self.radius,
        };

        if self.iteration % RADIUS_DECAY_INTERVAL == 0 && self.radius > 1 {
            self.radius -= 1;
        }
        self.alpha -= ALPHA_STEP;
        self.iteration += 1;

        Some(epoch)
    }
}

/// Outcome of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    /// Number of passes over the samples.
    pub passes: usize,
    /// Learning rate of the last pass.
    pub final_alpha: f64,
    /// Neighborhood radius of the last pass.
    pub final_radius: usize,
}

/// SOM trainer.
#[derive(Debug, Clone, Default)]
pub struct SomTrainer {
    parallel: bool,
}

impl SomTrainer {
    /// Creates a trainer from the given configuration.
    pub fn new(config: &SomConfig) -> Self {
        Self {
            parallel: config.parallel,
        }
    }

    /// Creates a trainer that runs per-node work on the rayon pool.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Whether per-node work runs in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Trains `weights` on `samples` in place.
    pub fn train(
        &self,
        samples: &Matrix,
        weights: &mut Matrix,
        alpha_min: f64,
    ) -> Result<TrainingSummary> {
        self.train_with_observer(samples, weights, alpha_min, |_| {})
    }

    /// Trains `weights` on `samples` in place, calling `observer` after each pass.
    pub fn train_with_observer<F>(
        &self,
        samples: &Matrix,
        weights: &mut Matrix,
        alpha_min: f64,
        mut observer: F,
    ) -> Result<TrainingSummary>
    where
        F: FnMut(&Epoch),
    {
        validate(samples, weights, alpha_min)?;

        let schedule = AnnealingSchedule::new(weights.rows(), alpha_min);
        let mut summary = TrainingSummary {
            passes: 0,
            final_alpha: schedule.alpha(),
            final_radius: schedule.radius(),
        };

        info!(
            "Training SOM: {} samples, {} nodes, {} features, alpha_min={}",
            samples.rows(),
            weights.rows(),
            weights.cols(),
            alpha_min
        );

        let mut distances = vec![0.0; weights.rows()];

        for epoch in schedule {
            for input in samples.iter_rows() {
                self.step(input, weights, &mut distances, epoch.alpha, epoch.radius);
            }

            if epoch.iteration % RADIUS_DECAY_INTERVAL == 0 {
                debug!(
                    "Pass {}: alpha={:.4}, radius={}",
                    epoch.iteration, epoch.alpha, epoch.radius
                );
            }

            summary = TrainingSummary {
                passes: epoch.iteration + 1,
                final_alpha: epoch.alpha,
                final_radius: epoch.radius,
            };
            observer(&epoch);
        }

        info!(
            "SOM training completed: {} passes, final alpha={:.4}, final radius={}",
            summary.passes, summary.final_alpha, summary.final_radius
        );
        Ok(summary)
    }

    /// Presents one sample: distances, BMU, neighborhood update.
    fn step(
        &self,
        input: &[f64],
        weights: &mut Matrix,
        distances: &mut [f64],
        alpha: f64,
        radius: usize,
    ) {
        if self.parallel {
            evaluate_distances_parallel(input, weights, distances);
        } else {
            evaluate_distances_into(input, weights, distances);
        }

        // validate() guarantees at least one node
        let Some((bmu, _)) = locate_bmu(distances) else {
            return;
        };

        if self.parallel {
            update_neighborhood_parallel(input, weights, bmu, radius, alpha);
        } else {
            update_neighborhood(input, weights, bmu, radius, alpha);
        }
    }
}

/// Trains `weights` on `samples` in place with the full annealing schedule.
///
/// Fails without touching `weights` if the map is empty, the feature counts
/// disagree or `alpha_min` is outside (0, 1).
pub fn train(samples: &Matrix, weights: &mut Matrix, alpha_min: f64) -> Result<()> {
    SomTrainer::default().train(samples, weights, alpha_min)?;
    Ok(())
}

fn validate(samples: &Matrix, weights: &Matrix, alpha_min: f64) -> Result<()> {
    if weights.is_empty() {
        return Err(TracerError::EmptyMap);
    }
    if samples.cols() != weights.cols() {
        return Err(TracerError::DimensionMismatch {
            expected: weights.cols(),
            found: samples.cols(),
        });
    }
    if !(alpha_min > 0.0 && alpha_min < 1.0) {
        return Err(TracerError::InvalidAlpha(alpha_min));
    }
    Ok(())
}
