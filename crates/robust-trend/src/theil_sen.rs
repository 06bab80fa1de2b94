//! Theil–Sen slope estimator (Sen's slope)
//!
//! The slope is the median of all pairwise slopes `(xⱼ − xᵢ) / (j − i)` for
//! `i < j`, with x-coordinates taken as the sample positions. An even number
//! of pairs uses the mean of the two central order statistics.
//!
//! Cost is O(n²) memory and O(n² log n) time per call, which is fine for the
//! small fixed windows this is used with.

use crate::traits::SlopeEstimator;
use robust_core::utils::{median_in_place, median_sorted, sorted};
use robust_core::{Error, Result};

/// Slope and intercept of a Theil–Sen fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TheilSenFit {
    pub slope: f64,
    /// `median(x) − slope · (n − 1) / 2`
    pub intercept: f64,
}

impl TheilSenFit {
    /// Fitted value at position `index`
    pub fn predict(&self, index: f64) -> f64 {
        self.intercept + self.slope * index
    }
}

/// Theil–Sen estimator over implicit integer positions
#[derive(Debug, Clone, Copy, Default)]
pub struct TheilSen;

impl TheilSen {
    pub fn new() -> Self {
        Self
    }

    /// All pairwise slopes in `(i, j)` lexicographic order
    ///
    /// Differences are taken on halved samples so that finite inputs near
    /// `f64::MAX` do not overflow when the slope itself is representable.
    /// Slopes beyond the `f64` range come out as infinities.
    pub fn pairwise_slopes(samples: &[f64]) -> Vec<f64> {
        let n = samples.len();
        let mut slopes = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                let half_rise = samples[j] * 0.5 - samples[i] * 0.5;
                slopes.push(half_rise / (j - i) as f64 * 2.0);
            }
        }
        slopes
    }

    /// Slope plus Sen's intercept
    pub fn fit(&self, samples: &[f64]) -> Result<TheilSenFit> {
        let slope = self.estimate(samples)?;
        let center = median_sorted(&sorted(samples))
            .ok_or_else(|| Error::Computation("median of empty window".to_string()))?;
        let intercept = center - slope * (samples.len() - 1) as f64 / 2.0;
        Ok(TheilSenFit { slope, intercept })
    }
}

impl SlopeEstimator for TheilSen {
    fn estimate(&self, samples: &[f64]) -> Result<f64> {
        if samples.len() < self.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: samples.len(),
            });
        }
        if let Some(idx) = samples.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("slope estimator samples", idx));
        }

        let mut slopes = Self::pairwise_slopes(samples);
        let slope = median_in_place(&mut slopes)
            .ok_or_else(|| Error::Computation("no pairwise slopes".to_string()))?;
        if !slope.is_finite() {
            return Err(Error::Computation(format!(
                "Theil-Sen slope {slope} is outside the f64 range"
            )));
        }
        Ok(slope)
    }

    fn name(&self) -> &'static str {
        "Theil-Sen"
    }
}
