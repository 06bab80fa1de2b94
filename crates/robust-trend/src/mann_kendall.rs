//! Mann–Kendall trend test
//!
//! Tests H₀: no monotonic trend against H₁: a monotonic trend exists.
//!
//! 1. S = Σᵢ<ⱼ sign(xⱼ − xᵢ)
//! 2. Var(S) = \[n(n−1)(2n+5) − Σₖ tₖ(tₖ−1)(2tₖ+5)\] / 18, where tₖ are the
//!    sizes of groups of exactly equal values
//! 3. Z = (S−1)/√Var(S) if S > 0, (S+1)/√Var(S) if S < 0, 0 otherwise
//! 4. p = 2·(1 − Φ(|Z|))
//!
//! A window of identical values has S = 0 and Var(S) = 0; it is reported as
//! Z = 0, p = 1 rather than as an error.

use crate::traits::TrendTest;
use robust_core::{Error, Result};
use statrs::function::erf::erfc;
use std::fmt;

/// Direction of a trend at a given significance level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    NoTrend,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::NoTrend => write!(f, "no trend"),
        }
    }
}

/// Full output of the Mann–Kendall test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannKendallResult {
    /// S statistic: Σ sign(xⱼ − xᵢ) for all i < j
    pub s_statistic: i64,
    /// Variance of S with tie correction
    pub variance: f64,
    /// Z statistic with continuity correction
    pub z_statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Kendall's tau: S / [n(n−1)/2]
    pub kendall_tau: f64,
}

impl MannKendallResult {
    /// Classify the trend at significance level `alpha`
    pub fn direction(&self, alpha: f64) -> TrendDirection {
        if self.p_value >= alpha {
            TrendDirection::NoTrend
        } else if self.z_statistic > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

/// Mann–Kendall test with normal approximation
#[derive(Debug, Clone, Copy, Default)]
pub struct MannKendall;

impl MannKendall {
    pub fn new() -> Self {
        Self
    }

    /// Run the test and return every intermediate statistic
    pub fn analyze(&self, samples: &[f64]) -> Result<MannKendallResult> {
        let n = samples.len();
        if n < self.minimum_sample_size() {
            return Err(Error::InsufficientData {
                expected: self.minimum_sample_size(),
                actual: n,
            });
        }
        if let Some(idx) = samples.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("trend test samples", idx));
        }

        let s = s_statistic(samples);
        let variance = s_variance(samples);

        let z_statistic = if s == 0 || variance <= 0.0 {
            0.0
        } else {
            let sigma = variance.sqrt();
            if s > 0 {
                (s as f64 - 1.0) / sigma
            } else {
                (s as f64 + 1.0) / sigma
            }
        };

        // 2·(1 − Φ(|z|)) == erfc(|z| / √2)
        let p_value = erfc(z_statistic.abs() / std::f64::consts::SQRT_2).clamp(0.0, 1.0);

        let nf = n as f64;
        let kendall_tau = (2 * s) as f64 / (nf * (nf - 1.0));

        Ok(MannKendallResult {
            s_statistic: s,
            variance,
            z_statistic,
            p_value,
            kendall_tau,
        })
    }
}

impl TrendTest for MannKendall {
    fn test(&self, samples: &[f64]) -> Result<f64> {
        self.analyze(samples).map(|r| r.p_value)
    }

    fn name(&self) -> &'static str {
        "Mann-Kendall"
    }
}

fn s_statistic(samples: &[f64]) -> i64 {
    let n = samples.len();
    let mut s: i64 = 0;
    for i in 0..n - 1 {
        for j in (i + 1)..n {
            let diff = samples[j] - samples[i];
            if diff > 0.0 {
                s += 1;
            } else if diff < 0.0 {
                s -= 1;
            }
        }
    }
    s
}

fn s_variance(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let tie_term = |t: usize| {
        let t = t as f64;
        t * (t - 1.0) * (2.0 * t + 5.0)
    };

    let mut tie_correction = 0.0;
    let mut run = 1;
    for i in 1..sorted.len() {
        if sorted[i] == sorted[i - 1] {
            run += 1;
        } else {
            tie_correction += tie_term(run);
            run = 1;
        }
    }
    tie_correction += tie_term(run);

    let nf = samples.len() as f64;
    ((nf * (nf - 1.0) * (2.0 * nf + 5.0) - tie_correction) / 18.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_window_has_no_trend() {
        let result = MannKendall.analyze(&[5.0; 12]).unwrap();
        assert_eq!(result.s_statistic, 0);
        assert_eq!(result.variance, 0.0);
        assert_eq!(result.z_statistic, 0.0);
        assert_eq!(result.p_value, 1.0);
        assert_eq!(result.direction(0.05), TrendDirection::NoTrend);
    }

    #[test]
    fn test_increasing_ramp_statistics() {
        let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let result = MannKendall.analyze(&data).unwrap();
        assert_eq!(result.s_statistic, 45);
        // n(n-1)(2n+5)/18 = 10*9*25/18
        assert_relative_eq!(result.variance, 125.0);
        assert_relative_eq!(result.z_statistic, 44.0 / 125.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(result.kendall_tau, 1.0);
        assert!(result.p_value < 1e-3);
        assert_eq!(result.direction(0.05), TrendDirection::Increasing);
    }

    #[test]
    fn test_decreasing_ramp() {
        let data: Vec<f64> = (0..8).map(|i| -(i as f64)).collect();
        let result = MannKendall.analyze(&data).unwrap();
        assert_eq!(result.s_statistic, -28);
        assert!(result.z_statistic < 0.0);
        assert!(result.p_value < 0.05);
        assert_eq!(result.direction(0.05), TrendDirection::Decreasing);
    }

    #[test]
    fn test_tie_correction() {
        // One tie group of size 2 (the two 4.0 values)
        let data = [1.0, 2.0, 4.0, 4.0, 6.0];
        let result = MannKendall.analyze(&data).unwrap();
        assert_eq!(result.s_statistic, 9);
        // (5*4*15 - 2*1*9) / 18 = (300 - 18) / 18
        assert_relative_eq!(result.variance, 282.0 / 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_p_value_for_zero_s_with_variance() {
        let data = [2.0, 1.0, 1.0, 2.0];
        let result = MannKendall.analyze(&data).unwrap();
        assert_eq!(result.s_statistic, 0);
        // Two tie groups of size 2: (4*3*13 - 2*18) / 18
        assert_relative_eq!(result.variance, 120.0 / 18.0, epsilon = 1e-12);
        assert_eq!(result.p_value, 1.0);
    }

    #[test]
    fn test_known_p_value() {
        // n = 4 increasing: S = 6, Var = 4*3*13/18 = 26/3, Z = 5/sqrt(26/3)
        let result = MannKendall.analyze(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let z: f64 = 5.0 / (26.0_f64 / 3.0).sqrt();
        assert_relative_eq!(result.z_statistic, z, epsilon = 1e-12);
        // Two-sided p for z ≈ 1.6984 is ≈ 0.0894
        assert_relative_eq!(result.p_value, 0.0894, epsilon = 1e-3);
    }

    #[test]
    fn test_insufficient_data() {
        let err = MannKendall.test(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(MannKendall.test(&[1.0, f64::NAN, 2.0]).is_err());
    }

    #[test]
    fn test_trait_object_and_reference() {
        let boxed: Box<dyn TrendTest> = Box::new(MannKendall::new());
        assert_eq!(boxed.name(), "Mann-Kendall");
        assert_eq!(boxed.test(&[2.0; 4]).unwrap(), 1.0);

        let by_ref = &MannKendall;
        assert_eq!(TrendTest::minimum_sample_size(&by_ref), 3);
    }
}
