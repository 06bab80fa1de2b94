//! Single-number summary of a detection result
//!
//! Detection classifies windows independently. A summary picks the first
//! center index that starts a run of consecutive equilibrated windows and
//! averages the series from there on.

use crate::types::DetectionResult;
use robust_core::utils::{mean, std_dev};
use robust_core::{Error, Result, Series};
use std::fmt;
use tracing::debug;

/// Equilibration time and equilibrated value derived from a detection result
#[derive(Debug, Clone, PartialEq)]
pub struct EquilibrationSummary {
    /// Sample index where equilibration is considered reached
    pub equilibration_index: usize,
    /// Time stamp of `equilibration_index`
    pub equilibration_time: f64,
    /// Mean of the values from `equilibration_index` to the end
    pub equilibrated_mean: f64,
    /// Sample standard deviation of the same values
    pub equilibrated_std_dev: f64,
    /// Number of consecutive equilibrated windows in the selected run
    pub run_length: usize,
    /// Share of all scanned windows classified as equilibrated
    pub equilibrated_fraction: f64,
}

impl EquilibrationSummary {
    /// Summarize `result`, requiring `min_consecutive` adjacent equilibrated windows
    ///
    /// Windows are adjacent when their centers differ by one. A
    /// `min_consecutive` of 0 is treated as 1.
    ///
    /// Returns `Ok(None)` when no qualifying run exists.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `result` was computed on a series of a
    /// different length.
    pub fn from_detection(
        series: &Series,
        result: &DetectionResult,
        min_consecutive: usize,
    ) -> Result<Option<Self>> {
        if result.sample_size() != series.len() {
            return Err(Error::size_mismatch(
                series.len(),
                result.sample_size(),
                "detection result does not belong to this series",
            ));
        }

        let required = min_consecutive.max(1);
        let Some((start, run_length)) = first_run(result.equilibration_points(), required) else {
            debug!(required, "no run of equilibrated windows long enough");
            return Ok(None);
        };

        let equilibration_time = series
            .time(start)
            .ok_or_else(|| Error::Computation(format!("equilibration index {start} out of range")))?;
        let tail = series.tail(start);

        let summary = Self {
            equilibration_index: start,
            equilibration_time,
            equilibrated_mean: mean(tail),
            equilibrated_std_dev: std_dev(tail),
            run_length,
            equilibrated_fraction: result.equilibration_points().len() as f64
                / result.window_count() as f64,
        };
        debug!(
            index = summary.equilibration_index,
            mean = summary.equilibrated_mean,
            run_length,
            "equilibration summary"
        );
        Ok(Some(summary))
    }
}

/// First run of consecutive centers at least `required` long, as `(start, length)`
fn first_run(points: &[usize], required: usize) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < points.len() {
        let mut j = i + 1;
        while j < points.len() && points[j] == points[j - 1] + 1 {
            j += 1;
        }
        if j - i >= required {
            return Some((points[i], j - i));
        }
        i = j;
    }
    None
}

impl fmt::Display for EquilibrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Equilibration Summary:")?;
        writeln!(
            f,
            "  Equilibrated at index {} (t = {:.4})",
            self.equilibration_index, self.equilibration_time
        )?;
        writeln!(
            f,
            "  Equilibrated value: {:.6} ± {:.6}",
            self.equilibrated_mean, self.equilibrated_std_dev
        )?;
        writeln!(f, "  Run length: {} windows", self.run_length)?;
        write!(f, "  Equilibrated fraction: {:.1}%", self.equilibrated_fraction * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_run() {
        assert_eq!(first_run(&[], 1), None);
        assert_eq!(first_run(&[3, 4, 9, 10, 11], 1), Some((3, 2)));
        assert_eq!(first_run(&[3, 4, 9, 10, 11], 3), Some((9, 3)));
        assert_eq!(first_run(&[3, 5, 7], 2), None);
    }

    #[test]
    fn test_summary_uses_tail_from_run_start() {
        let values = vec![0.0, 1.0, 2.0, 5.0, 5.0, 5.0, 5.0, 5.0];
        let series = Series::from_values(values).unwrap();
        let result = DetectionResult::new(vec![1, 3, 4], vec![0.0; 5], 3, 8);

        let summary = EquilibrationSummary::from_detection(&series, &result, 2)
            .unwrap()
            .unwrap();
        assert_eq!(summary.equilibration_index, 3);
        assert_eq!(summary.equilibration_time, 3.0);
        assert_eq!(summary.run_length, 2);
        assert_relative_eq!(summary.equilibrated_mean, 5.0);
        assert_relative_eq!(summary.equilibrated_std_dev, 0.0);
        assert_relative_eq!(summary.equilibrated_fraction, 0.6);
    }

    #[test]
    fn test_zero_min_consecutive_takes_first_point() {
        let series = Series::from_values(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let result = DetectionResult::new(vec![2], vec![0.0; 3], 3, 6);
        let summary = EquilibrationSummary::from_detection(&series, &result, 0)
            .unwrap()
            .unwrap();
        assert_eq!(summary.equilibration_index, 2);
        assert_relative_eq!(summary.equilibrated_mean, 4.5);
    }

    #[test]
    fn test_no_run_and_mismatch() {
        let series = Series::from_values(vec![1.0; 6]).unwrap();
        let result = DetectionResult::new(vec![1, 3], vec![0.0; 3], 3, 6);
        assert_eq!(EquilibrationSummary::from_detection(&series, &result, 2).unwrap(), None);

        let empty = DetectionResult::empty(10, 6);
        assert_eq!(EquilibrationSummary::from_detection(&series, &empty, 1).unwrap(), None);

        let other = DetectionResult::empty(3, 7);
        assert!(EquilibrationSummary::from_detection(&series, &other, 1).is_err());
    }
}
