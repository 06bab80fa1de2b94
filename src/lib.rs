//! Robust trend and equilibration analysis for time series
//!
//! Umbrella crate re-exporting the workspace crates:
//!
//! - [`robust_core`]: `Series`, errors, execution engines, cancellation
//! - [`robust_trend`]: Mann–Kendall trend test and Theil–Sen slope estimator
//! - [`robust_equilibration`]: sliding-window equilibration detection, summaries
//!   and CSV reports
//!
//! # Example
//!
//! ```rust
//! use robust_stationarity::prelude::*;
//!
//! let mut values: Vec<f64> = (0..20).map(|i| i as f64).collect();
//! values.extend(std::iter::repeat(19.0).take(40));
//! let series = Series::from_values(values).unwrap();
//!
//! let result = detect(&series, 10).unwrap();
//! assert_eq!(result.slopes().len(), 50);
//! assert!(result.first_equilibration_point().unwrap() >= 20);
//! ```

pub use robust_core;
pub use robust_equilibration;
pub use robust_trend;

pub use robust_core::{CancellationToken, Error, Result, Series};
pub use robust_equilibration::{
    detect, DetectionResult, EquilibrationDetector, EquilibrationParameters,
    EquilibrationReport, EquilibrationSummary,
};
pub use robust_trend::{MannKendall, SlopeEstimator, TheilSen, TrendTest};

/// Commonly used types and traits
pub mod prelude {
    pub use robust_core::prelude::*;
    pub use robust_equilibration::{
        detect, DetectionResult, EquilibrationDetector, EquilibrationParameters,
        EquilibrationReport, EquilibrationSummary, EquilibrationVisualizer, WindowResult,
    };
    pub use robust_trend::{MannKendall, SlopeEstimator, TheilSen, TrendTest};
}
