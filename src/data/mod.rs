//! Sample generation and weight initialization.

mod shapes;

pub use shapes::{Circle, Lemniscate, SampleShape};

use crate::error::{Result, TracerError};
use crate::som::Matrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates the crate's RNG from an optional seed.
///
/// `None` seeds from system entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Draws `num_samples` points from `shape`.
pub fn generate_samples<S, R>(shape: &S, num_samples: usize, rng: &mut R) -> Matrix
where
    S: SampleShape,
    R: Rng + ?Sized,
{
    let cols = shape.features();
    let mut samples = Matrix::zeros(num_samples, cols);

    for i in 0..num_samples {
        let point = shape.sample_point(rng);
        debug_assert_eq!(point.len(), cols);
        if let Some(row) = samples.row_mut(i) {
            row.copy_from_slice(&point);
        }
    }

    samples
}

/// Creates `num_nodes` weight vectors drawn uniformly from `[low, high)`.
pub fn uniform_weights<R: Rng + ?Sized>(
    num_nodes: usize,
    num_features: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Result<Matrix> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(TracerError::Config(format!(
            "Invalid initialization interval [{}, {}]",
            low, high
        )));
    }

    let data = (0..num_nodes * num_features)
        .map(|_| rng.gen_range(low..high))
        .collect();

    Matrix::from_vec(num_nodes, num_features, data)
}
