//! Core types for robust time series analysis
//!
//! This crate provides the foundation shared by the trend and equilibration
//! crates:
//!
//! - [`Series`]: a validated `(time, value)` sequence
//! - [`Error`] / [`Result`]: the unified error type
//! - [`execution`]: sequential and Rayon-backed execution engines
//! - [`CancellationToken`]: cooperative cancellation between units of work
//! - [`utils`]: small slice statistics (median, mean, standard deviation)
//!
//! # Example
//!
//! ```rust
//! use robust_core::{execution::sequential, ExecutionEngine, Series};
//!
//! let series = Series::from_values(vec![20.0, 20.1, 20.05, 20.02]).unwrap();
//! let engine = sequential();
//! let doubled = engine.execute_batch(series.len(), |i| series.values()[i] * 2.0);
//! assert_eq!(doubled.len(), 4);
//! ```

pub mod cancel;
pub mod error;
pub mod execution;
pub mod series;
pub mod utils;

// Re-export core types
pub use cancel::CancellationToken;
pub use error::{Error, Result};
pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};
pub use series::Series;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CancellationToken, Error, ExecutionEngine, ExecutionStrategy, Result, SequentialEngine,
        Series,
    };
    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}
