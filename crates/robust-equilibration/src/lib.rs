//! Sliding-window equilibration detection
//!
//! A signal is considered equilibrated over a window when it shows no
//! statistically significant monotonic trend AND its robust slope is
//! practically zero. This crate scans a fixed-size window one sample at a
//! time, runs a trend test and a slope estimator on each window, and reports
//! the centers of the windows that pass both criteria along with every
//! window's slope.
//!
//! # Algorithm Overview
//!
//! For a series of `N` samples and window size `w`, windows start at
//! `0, 1, ..., N - w - 1`. For the window starting at `i`:
//!
//! 1. The Mann–Kendall test gives a two-sided p-value for "no trend"
//! 2. The Theil–Sen estimator gives the median pairwise slope
//! 3. The window is equilibrated iff `p > 0.05` and `|slope| < 0.001`
//!    (both thresholds configurable)
//! 4. Equilibrated windows contribute the center index `i + w / 2`
//!
//! Slopes are collected for every window, so `slopes[k]` aligns with
//! `series.times()[k]`.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use robust_core::Series;
//! use robust_equilibration::detect;
//!
//! let series = Series::from_values(vec![20.0; 50]).unwrap();
//! let result = detect(&series, 10).unwrap();
//!
//! assert_eq!(result.equilibration_points(), (5..45).collect::<Vec<_>>().as_slice());
//! assert!(result.slopes().iter().all(|&s| s == 0.0));
//! ```
//!
//! ## Custom Thresholds and Summary
//!
//! ```rust
//! use robust_core::Series;
//! use robust_equilibration::{EquilibrationDetector, EquilibrationParameters, EquilibrationSummary};
//!
//! let mut values: Vec<f64> = (0..30).map(|i| 10.0 - 0.2 * i as f64).collect();
//! values.extend(std::iter::repeat(4.2).take(70));
//! let series = Series::from_values(values).unwrap();
//!
//! let params = EquilibrationParameters::new(12).with_slope_threshold(0.01);
//! let detector = EquilibrationDetector::new(params).unwrap();
//! let result = detector.detect(&series).unwrap();
//!
//! let summary = EquilibrationSummary::from_detection(&series, &result, 5)
//!     .unwrap()
//!     .expect("plateau is detected");
//! assert!(summary.equilibration_index >= 30);
//! assert!((summary.equilibrated_mean - 4.2).abs() < 1e-9);
//! ```

pub mod detector;
pub mod params;
pub mod report;
pub mod summary;
pub mod types;
pub mod visualization;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_data;

// Re-exports
pub use detector::{detect, EquilibrationDetector};
pub use params::{EquilibrationParameters, MIN_WINDOW_SIZE};
pub use report::{EquilibrationReport, ReportRow};
pub use summary::EquilibrationSummary;
pub use types::{DetectionResult, WindowResult};
pub use visualization::{EquilibrationVisualizer, NullEquilibrationVisualizer, RecordingVisualizer};

/// Detector running windows on the Rayon thread pool
#[cfg(feature = "parallel")]
pub type ParallelEquilibrationDetector = EquilibrationDetector<
    robust_trend::MannKendall,
    robust_trend::TheilSen,
    robust_core::ParallelEngine,
>;
