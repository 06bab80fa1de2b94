//! Error types for robust time series analysis
//!
//! Provides a unified error type for all robust-stationarity crates.

use thiserror::Error;

/// Core error type for robust statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input series (empty, non-increasing time, non-finite samples)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid analysis configuration (window size, thresholds)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Analysis was cancelled through a cancellation token
    #[error("Cancelled after {windows_completed} windows")]
    Cancelled { windows_completed: usize },

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Failure while writing a report
    #[error("Report error: {0}")]
    Report(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an empty series
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidInput(format!("{context} must contain at least one sample"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str, index: usize) -> Self {
        Self::InvalidInput(format!("{context} contains a NaN or infinite value at index {index}"))
    }

    /// Create an error for a window too small for the trend test
    pub fn window_too_small(window_size: usize, minimum: usize) -> Self {
        Self::InvalidConfig(format!(
            "window_size must be at least {minimum}, got {window_size}"
        ))
    }

    /// Whether this error was raised by validating caller input or configuration
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::InvalidConfig(_))
    }
}
