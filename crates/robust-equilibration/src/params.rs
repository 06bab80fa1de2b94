//! Parameters for equilibration detection

use robust_core::{Error, Result};

/// Smallest window on which the trend test is defined
pub const MIN_WINDOW_SIZE: usize = 3;

/// Parameters for window-based equilibration detection
///
/// A window is classified as equilibrated when the trend test's p-value is
/// strictly above `significance_level` AND the absolute slope is strictly
/// below `slope_threshold`. The slope threshold is in value units per
/// sample and must be calibrated to the scale of the signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibrationParameters {
    /// Number of consecutive samples per window
    pub window_size: usize,

    /// p-values above this level count as "no significant trend"
    pub significance_level: f64,

    /// Absolute slopes below this value count as "practically flat"
    pub slope_threshold: f64,
}

impl Default for EquilibrationParameters {
    fn default() -> Self {
        Self {
            window_size: 20,
            significance_level: 0.05,
            slope_threshold: 0.001,
        }
    }
}

impl EquilibrationParameters {
    /// Default thresholds with the given window size
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    /// Stricter classification: weaker evidence of trend still rejects a window
    pub fn strict() -> Self {
        Self {
            window_size: 30,
            significance_level: 0.1,
            slope_threshold: 0.0005,
        }
    }

    /// Relaxed classification for noisy signals
    pub fn relaxed() -> Self {
        Self {
            window_size: 15,
            significance_level: 0.01,
            slope_threshold: 0.005,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_significance_level(mut self, significance_level: f64) -> Self {
        self.significance_level = significance_level;
        self
    }

    pub fn with_slope_threshold(mut self, slope_threshold: f64) -> Self {
        self.slope_threshold = slope_threshold;
        self
    }

    /// Check the parameters before any scan starts
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if the window is smaller than
    /// [`MIN_WINDOW_SIZE`], the significance level is outside `(0, 1)`, or the
    /// slope threshold is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(Error::window_too_small(self.window_size, MIN_WINDOW_SIZE));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            )));
        }
        if !(self.slope_threshold.is_finite() && self.slope_threshold > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "slope_threshold must be positive and finite, got {}",
                self.slope_threshold
            )));
        }
        Ok(())
    }

    /// Apply the classification rule to one window's statistics
    #[inline]
    pub fn is_equilibrated(&self, p_value: f64, slope: f64) -> bool {
        p_value > self.significance_level && slope.abs() < self.slope_threshold
    }
}
