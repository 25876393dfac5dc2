//! Distance evaluation, BMU search and neighborhood update for a 1D SOM.
//!
//! The node chain is a [`Matrix`] whose row order defines the topology: node
//! `j` is adjacent to nodes `j - 1` and `j + 1`. Every function here is pure
//! apart from the buffer or matrix it is explicitly handed.

use crate::som::kernels::{distance_squared, pull_toward};
use crate::som::Matrix;
use rayon::prelude::*;
use std::ops::Range;

/// Computes the squared Euclidean distance from `input` to every node.
pub fn evaluate_distances(input: &[f64], weights: &Matrix) -> Vec<f64> {
    let mut distances = vec![0.0; weights.rows()];
    evaluate_distances_into(input, weights, &mut distances);
    distances
}

/// Computes the squared Euclidean distance from `input` to every node,
/// writing into a caller-provided scratch buffer of length `weights.rows()`.
pub fn evaluate_distances_into(input: &[f64], weights: &Matrix, distances: &mut [f64]) {
    debug_assert_eq!(distances.len(), weights.rows());

    for (d, node) in distances.iter_mut().zip(weights.iter_rows()) {
        *d = distance_squared(node, input);
    }
}

/// Parallel version of [`evaluate_distances_into`].
///
/// Each worker writes only its own entries of `distances`.
pub fn evaluate_distances_parallel(input: &[f64], weights: &Matrix, distances: &mut [f64]) {
    debug_assert_eq!(distances.len(), weights.rows());

    distances
        .par_iter_mut()
        .zip(weights.as_slice().par_chunks_exact(weights.cols()))
        .for_each(|(d, node)| *d = distance_squared(node, input));
}

/// Finds the Best Matching Unit in a distance vector.
///
/// Returns the index and value of the minimum. Ties go to the lowest index.
/// Returns `None` for an empty slice.
pub fn locate_bmu(distances: &[f64]) -> Option<(usize, f64)> {
    if distances.is_empty() {
        return None;
    }

    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;

    for (i, &d) in distances.iter().enumerate() {
        if d < best_dist {
            best_dist = d;
            best_idx = i;
        }
    }

    Some((best_idx, best_dist))
}

/// The half-open range of nodes within `radius` of `bmu`, clamped to the chain.
#[inline]
pub fn neighborhood_window(bmu: usize, radius: usize, num_nodes: usize) -> Range<usize> {
    let from = bmu.saturating_sub(radius);
    let to = bmu.saturating_add(radius).saturating_add(1).min(num_nodes);
    from..to
}

/// Pulls every node within `radius` of `bmu` towards `input` by `alpha`.
///
/// Nodes outside the window are left untouched.
pub fn update_neighborhood(
    input: &[f64],
    weights: &mut Matrix,
    bmu: usize,
    radius: usize,
    alpha: f64,
) {
    let cols = weights.cols();
    let window = neighborhood_window(bmu, radius, weights.rows());

    for node in weights.rows_range_mut(window).chunks_exact_mut(cols) {
        pull_toward(node, input, alpha);
    }
}

/// Parallel version of [`update_neighborhood`].
pub fn update_neighborhood_parallel(
    input: &[f64],
    weights: &mut Matrix,
    bmu: usize,
    radius: usize,
    alpha: f64,
) {
    let cols = weights.cols();
    let window = neighborhood_window(bmu, radius, weights.rows());

    weights
        .rows_range_mut(window)
        .par_chunks_exact_mut(cols)
        .for_each(|node| pull_toward(node, input, alpha));
}
