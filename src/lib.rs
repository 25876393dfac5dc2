//! # Kohonen Tracer - One-Dimensional Self-Organizing Map
//!
//! Fits an ordered chain of prototype vectors ("nodes") to the shape of an
//! unlabeled point cloud using Kohonen's competitive-learning algorithm.
//!
//! ## Overview
//!
//! For every sample the map computes the squared distance to every node,
//! picks the closest node (the Best Matching Unit) and pulls the BMU and its
//! neighbors in index space towards the sample. Over a fixed number of
//! passes the learning rate and the neighborhood radius shrink, moving from
//! coarse global ordering to fine local fitting.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kohonen_tracer::data::{generate_samples, seeded_rng, uniform_weights, Circle};
//! use kohonen_tracer::{save_matrix, train};
//!
//! # fn main() -> kohonen_tracer::Result<()> {
//! let mut rng = seeded_rng(Some(42));
//! let mut weights = uniform_weights(50, 2, -1.0, 1.0, &mut rng)?;
//! let samples = generate_samples(&Circle::default(), 500, &mut rng);
//!
//! train(&samples, &mut weights, 0.1)?;
//! save_matrix("w12.csv", &weights, 4)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`som`] - Matrix type, distance/BMU/update operations and the trainer
//! - [`data`] - Point cloud generators and weight initialization
//! - [`storage`] - CSV dump
//! - [`scenario`] - Complete generate/train/dump runs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod data;
pub mod error;
pub mod scenario;
pub mod som;
pub mod storage;

// Re-export commonly used types
pub use config::{Config, ExportConfig, SomConfig};
pub use error::{Result, TracerError};
pub use scenario::{Scenario, ScenarioReport, ShapeKind};
pub use som::{
    evaluate_distances, locate_bmu, train, update_neighborhood, AnnealingSchedule, Epoch, Matrix,
    SomTrainer, TrainingSummary,
};
pub use storage::save_matrix;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
