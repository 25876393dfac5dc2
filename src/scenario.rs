//! Ready-made training runs: generate a point cloud, fit a chain to it and
//! dump samples, initial weights and trained weights as CSV.
//!
//! The dumps can be plotted with gnuplot:
//!
//! ```text
//! set datafile separator ','
//! plot "test1.csv" title "original", "w11.csv" title "w1", "w12.csv" title "w2"
//! ```

use crate::config::Config;
use crate::data::{generate_samples, seeded_rng, uniform_weights, Circle, Lemniscate, SampleShape};
use crate::error::{Result, TracerError};
use crate::som::{Epoch, SomTrainer, TrainingSummary};
use crate::storage::save_matrix;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The point cloud a scenario trains on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Noisy circle.
    Circle(Circle),
    /// Noisy lemniscate of Gerono.
    Lemniscate(Lemniscate),
}

impl SampleShape for ShapeKind {
    fn features(&self) -> usize {
        match self {
            ShapeKind::Circle(shape) => shape.features(),
            ShapeKind::Lemniscate(shape) => shape.features(),
        }
    }

    fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        match self {
            ShapeKind::Circle(shape) => shape.sample_point(rng),
            ShapeKind::Lemniscate(shape) => shape.sample_point(rng),
        }
    }
}

/// A complete training run and the files it writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Name used in log output.
    pub name: String,
    /// Point cloud to sample.
    pub shape: ShapeKind,
    /// Number of samples.
    pub num_samples: usize,
    /// Number of nodes in the chain.
    pub num_nodes: usize,
    /// Learning-rate stopping threshold.
    pub alpha_min: f64,
    /// File name for the samples.
    pub samples_file: String,
    /// File name for the weights before training.
    pub initial_weights_file: String,
    /// File name for the weights after training.
    pub trained_weights_file: String,
}

/// Paths written by [`Scenario::run`] and the training outcome.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Samples CSV.
    pub samples_path: PathBuf,
    /// Initial weights CSV.
    pub initial_weights_path: PathBuf,
    /// Trained weights CSV.
    pub trained_weights_path: PathBuf,
    /// Training outcome.
    pub summary: TrainingSummary,
}

impl Scenario {
    /// 500 points near a circle of radius 0.75, traced by 50 nodes.
    pub fn circle() -> Self {
        Self {
            name: "circle".to_string(),
            shape: ShapeKind::Circle(Circle::default()),
            num_samples: 500,
            num_nodes: 50,
            alpha_min: 0.1,
            samples_file: "test1.csv".to_string(),
            initial_weights_file: "w11.csv".to_string(),
            trained_weights_file: "w12.csv".to_string(),
        }
    }

    /// 500 points near a lemniscate of Gerono, traced by 20 nodes.
    pub fn lemniscate() -> Self {
        Self {
            name: "lemniscate".to_string(),
            shape: ShapeKind::Lemniscate(Lemniscate::default()),
            num_samples: 500,
            num_nodes: 20,
            alpha_min: 0.01,
            samples_file: "test2.csv".to_string(),
            initial_weights_file: "w21.csv".to_string(),
            trained_weights_file: "w22.csv".to_string(),
        }
    }

    /// Checks the run parameters before anything is written.
    pub fn validate(&self) -> Result<()> {
        if self.num_nodes == 0 {
            return Err(TracerError::EmptyMap);
        }
        if !(self.alpha_min > 0.0 && self.alpha_min < 1.0) {
            return Err(TracerError::InvalidAlpha(self.alpha_min));
        }
        Ok(())
    }

    /// Runs the scenario, writing its CSV files into `out_dir`.
    pub fn run<P: AsRef<Path>>(&self, config: &Config, out_dir: P) -> Result<ScenarioReport> {
        self.run_with_observer(config, out_dir, |_| {})
    }

    /// Runs the scenario, calling `observer` after every training pass.
    pub fn run_with_observer<P, F>(
        &self,
        config: &Config,
        out_dir: P,
        observer: F,
    ) -> Result<ScenarioReport>
    where
        P: AsRef<Path>,
        F: FnMut(&Epoch),
    {
        config.validate()?;
        self.validate()?;

        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)?;

        let mut rng = seeded_rng(config.som.seed);
        let mut weights = uniform_weights(
            self.num_nodes,
            self.shape.features(),
            config.som.init_low,
            config.som.init_high,
            &mut rng,
        )?;
        let samples = generate_samples(&self.shape, self.num_samples, &mut rng);

        let precision = config.export.precision;
        let samples_path = out_dir.join(&self.samples_file);
        let initial_weights_path = out_dir.join(&self.initial_weights_file);
        let trained_weights_path = out_dir.join(&self.trained_weights_file);

        save_matrix(&samples_path, &samples, precision)?;
        save_matrix(&initial_weights_path, &weights, precision)?;

        info!(
            "Scenario {}: {} samples, {} nodes",
            self.name, self.num_samples, self.num_nodes
        );
        let trainer = SomTrainer::new(&config.som);
        let summary = trainer.train_with_observer(&samples, &mut weights, self.alpha_min, observer)?;

        save_matrix(&trained_weights_path, &weights, precision)?;

        Ok(ScenarioReport {
            samples_path,
            initial_weights_path,
            trained_weights_path,
            summary,
        })
    }
}
