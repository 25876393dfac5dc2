//! Noisy 2D point clouds for the SOM to trace.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A distribution of points in feature space.
pub trait SampleShape {
    /// Number of features per point.
    fn features(&self) -> usize;

    /// Draws one point.
    fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64>;
}

/// Points scattered around the circumference of a circle centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Nominal radius.
    pub radius: f64,
    /// Maximum deviation from the nominal radius.
    pub spread: f64,
}

impl Default for Circle {
    fn default() -> Self {
        Self {
            radius: 0.75,
            spread: 0.3,
        }
    }
}

impl SampleShape for Circle {
    fn features(&self) -> usize {
        2
    }

    fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let r = uniform(rng, self.radius - self.spread, self.radius + self.spread);
        let theta = uniform(rng, 0.0, 2.0 * PI);
        vec![r * theta.cos(), r * theta.sin()]
    }
}

/// Points scattered around the lemniscate of Gerono, `x = cos t`, `y = sin(2t) / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lemniscate {
    /// Maximum offset along each axis.
    pub spread: f64,
}

impl Default for Lemniscate {
    fn default() -> Self {
        Self { spread: 0.2 }
    }
}

impl SampleShape for Lemniscate {
    fn features(&self) -> usize {
        2
    }

    fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let dx = uniform(rng, -self.spread, self.spread);
        let dy = uniform(rng, -self.spread, self.spread);
        let theta = uniform(rng, 0.0, PI);
        vec![dx + theta.cos(), dy + (2.0 * theta).sin() / 2.0]
    }
}

/// Uniform draw in `[low, high)`; returns `low` for an empty interval.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_circle_points_in_annulus() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let circle = Circle::default();

        for _ in 0..1000 {
            let p = circle.sample_point(&mut rng);
            assert_eq!(p.len(), 2);
            let r = (p[0] * p[0] + p[1] * p[1]).sqrt();
            assert!(r >= 0.45 - 1e-12 && r <= 1.05 + 1e-12, "r = {}", r);
        }
    }

    #[test]
    fn test_circle_without_spread() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let circle = Circle { radius: 2.0, spread: 0.0 };
        let p = circle.sample_point(&mut rng);
        assert!(((p[0] * p[0] + p[1] * p[1]).sqrt() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_lemniscate_points_near_curve() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let shape = Lemniscate::default();

        for _ in 0..1000 {
            let p = shape.sample_point(&mut rng);
            assert!(p[0].abs() <= 1.2 + 1e-12);
            assert!(p[1].abs() <= 0.7 + 1e-12);
        }
    }

    #[test]
    fn test_features() {
        assert_eq!(Circle::default().features(), 2);
        assert_eq!(Lemniscate::default().features(), 2);
    }
}
