//! Per-row kernels shared by the sequential and parallel code paths.
//!
//! Both paths call the same functions, so they produce bit-identical results.

/// Compute squared Euclidean distance between two slices.
/// Unrolled by 4 for autovectorization.
#[inline]
pub fn distance_squared(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "Weight and input dimensions must match");

    let chunks = a.len() / 4;
    let remainder = a.len() % 4;

    let mut sum = 0.0;

    for i in 0..chunks {
        let base = i * 4;
        let d0 = a[base] - b[base];
        let d1 = a[base + 1] - b[base + 1];
        let d2 = a[base + 2] - b[base + 2];
        let d3 = a[base + 3] - b[base + 3];

        sum += d0 * d0 + d1 * d1 + d2 * d2 + d3 * d3;
    }

    let base = chunks * 4;
    for i in 0..remainder {
        let d = a[base + i] - b[base + i];
        sum += d * d;
    }

    sum
}

/// Move `weights` towards `input` by the fraction `alpha`.
///
/// `w += alpha * (x - w)` for every component.
#[inline]
pub fn pull_toward(weights: &mut [f64], input: &[f64], alpha: f64) {
    debug_assert_eq!(weights.len(), input.len(), "Weight and input dimensions must match");

    for (w, x) in weights.iter_mut().zip(input.iter()) {
        *w += alpha * (x - *w);
    }
}
