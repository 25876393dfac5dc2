//! One-dimensional Self-Organizing Map.
//!
//! - **Matrix**: owned row-major storage for samples and node weights (matrix.rs)
//! - **Kernels**: per-row distance and pull operations (kernels.rs)
//! - **Map operations**: distances, BMU search, neighborhood update (map.rs)
//! - **Online Training**: annealing schedule and training loop (training.rs)

pub mod kernels;
pub mod map;
mod matrix;
pub mod training;

pub use map::{
    evaluate_distances, evaluate_distances_into, evaluate_distances_parallel, locate_bmu,
    neighborhood_window, update_neighborhood, update_neighborhood_parallel,
};
pub use matrix::Matrix;
pub use training::{
    train, AnnealingSchedule, Epoch, SomTrainer, TrainingSummary, ALPHA_START, ALPHA_STEP,
    RADIUS_DECAY_INTERVAL,
};
