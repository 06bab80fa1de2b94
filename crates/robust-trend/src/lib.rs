//! Non-parametric trend analysis for short windows
//!
//! This crate provides the two statistical capabilities used by window-based
//! equilibration detection:
//!
//! - [`TrendTest`] implemented by [`MannKendall`]: two-sided p-value for
//!   "no monotonic trend"
//! - [`SlopeEstimator`] implemented by [`TheilSen`]: median of pairwise slopes
//!
//! ## Usage
//!
//! ```rust
//! use robust_trend::{MannKendall, SlopeEstimator, TheilSen, TrendTest};
//!
//! let window = [1.0, 2.0, 4.0, 4.0, 6.0];
//! let p = MannKendall.test(&window).unwrap();
//! let slope = TheilSen.estimate(&window).unwrap();
//!
//! assert!(p > 0.0 && p < 0.1);
//! assert_eq!(slope, 1.125);
//! ```

pub mod mann_kendall;
pub mod theil_sen;
pub mod traits;

pub use mann_kendall::{MannKendall, MannKendallResult, TrendDirection};
pub use theil_sen::{TheilSen, TheilSenFit};
pub use traits::{SlopeEstimator, TrendTest};
