//! Capability traits for trend analysis on a single window
//!
//! Window-based detectors depend only on these two narrow interfaces, so a
//! caller can plug in a different validated routine or a deterministic test
//! double without touching the detector.

use robust_core::Result;

/// Non-parametric test for a monotonic trend
pub trait TrendTest: Send + Sync {
    /// Two-sided p-value for the null hypothesis "no monotonic trend"
    ///
    /// Implementations must be deterministic and must return a value in
    /// `[0, 1]`. Constant input is valid and yields `1.0`.
    fn test(&self, samples: &[f64]) -> Result<f64>;

    /// Get the name of the test
    fn name(&self) -> &'static str;

    /// Get the minimum sample size required by the test
    fn minimum_sample_size(&self) -> usize {
        3
    }
}

/// Robust estimator of the linear slope of an evenly spaced sequence
///
/// Samples are treated as observations at the implicit positions
/// `0, 1, ..., len - 1`.
pub trait SlopeEstimator: Send + Sync {
    /// Estimate the slope in value units per index step
    fn estimate(&self, samples: &[f64]) -> Result<f64>;

    /// Get the name of the estimator
    fn name(&self) -> &'static str;

    /// Get the minimum sample size required by the estimator
    fn minimum_sample_size(&self) -> usize {
        2
    }
}

impl<T: TrendTest + ?Sized> TrendTest for &T {
    fn test(&self, samples: &[f64]) -> Result<f64> {
        (**self).test(samples)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn minimum_sample_size(&self) -> usize {
        (**self).minimum_sample_size()
    }
}

impl<S: SlopeEstimator + ?Sized> SlopeEstimator for &S {
    fn estimate(&self, samples: &[f64]) -> Result<f64> {
        (**self).estimate(samples)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn minimum_sample_size(&self) -> usize {
        (**self).minimum_sample_size()
    }
}
