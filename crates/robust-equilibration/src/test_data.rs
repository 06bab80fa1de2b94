//! Test signal generators for equilibration detection
//!
//! All generators are deterministic; random ones take an explicit seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use robust_core::{Error, Result, Series};

/// Gaussian random walk around a base level
///
/// `value[i] = base + sum_{k <= i} e_k` with `e_k ~ N(0, noise_scale)` and
/// times `0, 1, ..., num_points - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomWalk {
    pub base: f64,
    pub noise_scale: f64,
    pub num_points: usize,
    pub seed: u64,
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self {
            base: 20.0,
            noise_scale: 0.05,
            num_points: 1000,
            seed: 42,
        }
    }
}

impl RandomWalk {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = num_points;
        self
    }

    /// Generate the walk
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] for a negative or non-finite `noise_scale`,
    /// [`Error::InvalidInput`] for `num_points == 0`.
    pub fn generate(&self) -> Result<Series> {
        if !(self.noise_scale.is_finite() && self.noise_scale >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "noise_scale must be finite and non-negative, got {}",
                self.noise_scale
            )));
        }
        let normal = Normal::new(0.0, self.noise_scale)
            .map_err(|e| Error::InvalidConfig(format!("noise_scale {}: {e}", self.noise_scale)))?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut level = self.base;
        let values = (0..self.num_points)
            .map(|_| {
                level += normal.sample(&mut rng);
                level
            })
            .collect();
        Series::from_values(values)
    }
}

/// `n` copies of `level`
pub fn constant(n: usize, level: f64) -> Vec<f64> {
    vec![level; n]
}

/// `intercept + slope * i` for `i` in `0..n`
pub fn ramp(n: usize, intercept: f64, slope: f64) -> Vec<f64> {
    (0..n).map(|i| intercept + slope * i as f64).collect()
}

/// Linear approach over `ramp_len` samples followed by a flat plateau
///
/// The plateau value equals the ramp's final value, so the signal is
/// continuous.
pub fn ramp_then_plateau(ramp_len: usize, plateau_len: usize, start: f64, slope: f64) -> Vec<f64> {
    let mut data = ramp(ramp_len, start, slope);
    let plateau = data.last().copied().unwrap_or(start);
    data.extend(std::iter::repeat(plateau).take(plateau_len));
    data
}

/// `level + amplitude * sin(2 pi i / period)` for `i` in `0..n`
pub fn oscillation(n: usize, level: f64, amplitude: f64, period: f64) -> Vec<f64> {
    (0..n)
        .map(|i| level + amplitude * (std::f64::consts::TAU * i as f64 / period).sin())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_walk_is_reproducible() {
        let a = RandomWalk::default().generate().unwrap();
        let b = RandomWalk::default().generate().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 1000);
        assert_eq!(a.times()[999], 999.0);

        let c = RandomWalk::default().with_seed(7).generate().unwrap();
        assert_ne!(a.values(), c.values());
    }

    #[test]
    fn test_random_walk_rejects_bad_noise() {
        for noise_scale in [-1.0, -1e-9, f64::NAN, f64::INFINITY] {
            let walk = RandomWalk {
                noise_scale,
                ..RandomWalk::default()
            };
            assert!(
                matches!(walk.generate(), Err(Error::InvalidConfig(_))),
                "noise_scale {noise_scale}"
            );
        }

        let flat = RandomWalk {
            noise_scale: 0.0,
            num_points: 5,
            ..RandomWalk::default()
        };
        assert_eq!(flat.generate().unwrap().values(), &[20.0; 5]);
    }

    #[test]
    fn test_ramp_then_plateau() {
        let data = ramp_then_plateau(4, 3, 1.0, 0.5);
        assert_eq!(data, vec![1.0, 1.5, 2.0, 2.5, 2.5, 2.5, 2.5]);
    }
}
