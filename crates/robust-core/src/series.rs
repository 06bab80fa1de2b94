//! Validated univariate time series
//!
//! A [`Series`] is an ordered sequence of `(time, value)` samples. Construction
//! validates eagerly so that every downstream analysis can assume:
//!
//! - at least one sample
//! - strictly increasing, finite time coordinates
//! - finite values

use crate::error::{Error, Result};

/// An immutable, validated time series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl Series {
    /// Create a series from parallel time and value vectors
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the vectors differ in length, are
    /// empty, contain non-finite entries, or if time is not strictly increasing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use robust_core::Series;
    ///
    /// let series = Series::new(vec![0.0, 0.5, 1.0], vec![20.0, 20.1, 20.05]).unwrap();
    /// assert_eq!(series.len(), 3);
    ///
    /// assert!(Series::new(vec![0.0, 0.0], vec![1.0, 2.0]).is_err());
    /// ```
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::size_mismatch(times.len(), values.len(), "series values"));
        }
        if values.is_empty() {
            return Err(Error::empty_input("series"));
        }
        if let Some(idx) = times.iter().position(|t| !t.is_finite()) {
            return Err(Error::non_finite("series times", idx));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(Error::non_finite("series values", idx));
        }
        if let Some(idx) = times.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::InvalidInput(format!(
                "series times must be strictly increasing: t[{}] = {} is not greater than t[{}] = {}",
                idx + 1,
                times[idx + 1],
                idx,
                times[idx]
            )));
        }

        Ok(Self { times, values })
    }

    /// Create a series from `(time, value)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (times, values) = pairs.into_iter().unzip();
        Self::new(times, values)
    }

    /// Create a series with implicit times `0, 1, ..., n - 1`
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let times = (0..values.len()).map(|i| i as f64).collect();
        Self::new(times, values)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed series; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Time coordinates
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Sample values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Time at `index`, if in range
    pub fn time(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// Value at `index`, if in range
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Iterate over `(time, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Values from `start` to the end of the series (empty if out of range)
    pub fn tail(&self, start: usize) -> &[f64] {
        self.values.get(start..).unwrap_or(&[])
    }
}
