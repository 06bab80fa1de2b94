//! Window-based equilibration detection
//!
//! A fixed-size window slides one sample at a time over the series. Each
//! window is tested for a monotonic trend and given a robust slope estimate,
//! then classified on its own:
//!
//! ```text
//! equilibrated  <=>  p_value > significance_level  AND  |slope| < slope_threshold
//! ```
//!
//! Every window contributes its slope to the output; equilibrated windows also
//! contribute their center index. No aggregation across windows happens here;
//! see [`crate::summary`] for deriving a single equilibration time.

use crate::params::EquilibrationParameters;
use crate::types::{DetectionResult, WindowResult};
use crate::visualization::{EquilibrationVisualizer, NullEquilibrationVisualizer};
use robust_core::{
    CancellationToken, Error, ExecutionEngine, Result, SequentialEngine, Series,
};
use robust_trend::{MannKendall, SlopeEstimator, TheilSen, TrendTest};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, instrument, trace};

/// Equilibration detector parameterized by its statistical capabilities
///
/// # Type Parameters
///
/// - `T`: trend test producing the per-window p-value
/// - `S`: slope estimator producing the per-window slope
/// - `E`: execution engine evaluating the windows
#[derive(Debug, Clone)]
pub struct EquilibrationDetector<T = MannKendall, S = TheilSen, E = SequentialEngine> {
    trend_test: T,
    slope_estimator: S,
    engine: E,
    params: EquilibrationParameters,
}

impl EquilibrationDetector {
    /// Mann–Kendall + Theil–Sen detector running sequentially
    ///
    /// # Errors
    ///
    /// [`Error::InvalidConfig`] if `params` fail validation.
    pub fn new(params: EquilibrationParameters) -> Result<Self> {
        Self::with_components(MannKendall, TheilSen, SequentialEngine, params)
    }

    /// Default thresholds with the given window size
    pub fn with_window_size(window_size: usize) -> Result<Self> {
        Self::new(EquilibrationParameters::new(window_size))
    }
}

impl<T, S, E> EquilibrationDetector<T, S, E>
where
    T: TrendTest,
    S: SlopeEstimator,
    E: ExecutionEngine,
{
    /// Create a detector from explicit capabilities
    pub fn with_components(
        trend_test: T,
        slope_estimator: S,
        engine: E,
        params: EquilibrationParameters,
    ) -> Result<Self> {
        params.validate()?;
        let required = trend_test
            .minimum_sample_size()
            .max(slope_estimator.minimum_sample_size());
        if params.window_size < required {
            return Err(Error::window_too_small(params.window_size, required));
        }

        Ok(Self {
            trend_test,
            slope_estimator,
            engine,
            params,
        })
    }

    /// Swap the execution engine, keeping everything else
    pub fn with_engine<E2: ExecutionEngine>(self, engine: E2) -> EquilibrationDetector<T, S, E2> {
        EquilibrationDetector {
            trend_test: self.trend_test,
            slope_estimator: self.slope_estimator,
            engine,
            params: self.params,
        }
    }

    pub fn params(&self) -> &EquilibrationParameters {
        &self.params
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Number of windows scanned for a series of `sample_size` samples
    ///
    /// Window starts run over `0..sample_size - window_size`, so a series no
    /// longer than the window yields no windows.
    pub fn window_count(&self, sample_size: usize) -> usize {
        sample_size.saturating_sub(self.params.window_size)
    }

    /// Analyze one window starting at sample `start`
    pub fn analyze_window(&self, window: &[f64], start: usize) -> Result<WindowResult> {
        let p_value = self.trend_test.test(window)?;
        let slope = self.slope_estimator.estimate(window)?;
        let equilibrated = self.params.is_equilibrated(p_value, slope);

        trace!(start, p_value, slope, equilibrated, "window analyzed");

        Ok(WindowResult {
            start_index: start,
            center_index: start + self.params.window_size / 2,
            p_value,
            slope,
            equilibrated,
        })
    }

    /// Per-window diagnostics in scan order
    pub fn analyze_windows(&self, series: &Series) -> Result<Vec<WindowResult>> {
        self.scan(series, None)
    }

    /// Detect equilibrated windows
    ///
    /// # Examples
    ///
    /// ```rust
    /// use robust_core::Series;
    /// use robust_equilibration::EquilibrationDetector;
    ///
    /// let series = Series::from_values(vec![20.0; 50]).unwrap();
    /// let detector = EquilibrationDetector::with_window_size(10).unwrap();
    /// let result = detector.detect(&series).unwrap();
    ///
    /// assert_eq!(result.slopes().len(), 40);
    /// assert_eq!(result.first_equilibration_point(), Some(5));
    /// ```
    pub fn detect(&self, series: &Series) -> Result<DetectionResult> {
        self.detect_with_visualizer(series, None, &mut NullEquilibrationVisualizer)
    }

    /// Detect, checking `token` before every window
    ///
    /// # Errors
    ///
    /// [`Error::Cancelled`] once the token is cancelled; no partial result is
    /// returned.
    pub fn detect_with_cancellation(
        &self,
        series: &Series,
        token: &CancellationToken,
    ) -> Result<DetectionResult> {
        self.detect_with_visualizer(series, Some(token), &mut NullEquilibrationVisualizer)
    }

    /// Detect while reporting each stage to `visualizer`
    #[instrument(
        level = "debug",
        skip_all,
        fields(samples = series.len(), window_size = self.params.window_size)
    )]
    pub fn detect_with_visualizer<V: EquilibrationVisualizer>(
        &self,
        series: &Series,
        token: Option<&CancellationToken>,
        visualizer: &mut V,
    ) -> Result<DetectionResult> {
        visualizer.record_series(series)?;
        visualizer.record_parameters(&self.params)?;

        let windows = self.scan(series, token)?;
        for window in &windows {
            visualizer.record_window(window)?;
        }

        let result = DetectionResult::from_windows(&windows, self.params.window_size, series.len());
        debug!(
            windows = result.window_count(),
            equilibrated = result.equilibration_points().len(),
            first = ?result.first_equilibration_point(),
            "detection complete"
        );

        visualizer.record_result(&result)?;
        Ok(result)
    }

    fn scan(&self, series: &Series, token: Option<&CancellationToken>) -> Result<Vec<WindowResult>> {
        let window_size = self.params.window_size;
        let count = self.window_count(series.len());
        if count == 0 {
            debug!(samples = series.len(), window_size, "series shorter than window, nothing to scan");
            return Ok(Vec::new());
        }

        debug!(
            windows = count,
            pairwise_slopes = pairwise_slope_count(count, window_size),
            trend_test = self.trend_test.name(),
            slope_estimator = self.slope_estimator.name(),
            strategy = ?self.engine.strategy(),
            "scanning windows"
        );

        let values = series.values();
        let completed = AtomicUsize::new(0);
        let results = self.engine.execute_batch(count, |start| {
            if token.is_some_and(CancellationToken::is_cancelled) {
                return Err(Error::Cancelled {
                    windows_completed: completed.load(Ordering::Relaxed),
                });
            }
            let result = self.analyze_window(&values[start..start + window_size], start);
            completed.fetch_add(1, Ordering::Relaxed);
            result
        });

        results.into_iter().collect()
    }
}

/// Pairwise slopes computed over `windows` windows of `window_size`, saturating
fn pairwise_slope_count(windows: usize, window_size: usize) -> usize {
    windows.saturating_mul(window_size.saturating_mul(window_size.saturating_sub(1)) / 2)
}

/// Detect equilibration with Mann–Kendall, Theil–Sen and default thresholds
///
/// # Errors
///
/// [`Error::InvalidConfig`] if `window_size < 3`.
pub fn detect(series: &Series, window_size: usize) -> Result<DetectionResult> {
    EquilibrationDetector::with_window_size(window_size)?.detect(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visualization::RecordingVisualizer;

    /// Returns a fixed p-value and counts invocations
    struct FixedTrendTest {
        p_value: f64,
        calls: AtomicUsize,
    }

    impl FixedTrendTest {
        fn new(p_value: f64) -> Self {
            Self {
                p_value,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TrendTest for FixedTrendTest {
        fn test(&self, _: &[f64]) -> Result<f64> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Ok(self.p_value)
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    /// Uses the first sample of each window as its slope
    struct FirstSampleSlope;

    impl SlopeEstimator for FirstSampleSlope {
        fn estimate(&self, samples: &[f64]) -> Result<f64> {
            Ok(samples[0])
        }

        fn name(&self) -> &'static str {
            "first-sample"
        }
    }

    struct FailingSlope;

    impl SlopeEstimator for FailingSlope {
        fn estimate(&self, _: &[f64]) -> Result<f64> {
            Err(Error::Computation("boom".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn series(values: Vec<f64>) -> Series {
        Series::from_values(values).unwrap()
    }

    #[test]
    fn test_classification_uses_both_thresholds() {
        // Slopes per window are the window's first value: 0, 0.0005, 0.01, 0, 0
        let data = vec![0.0, 0.0005, 0.01, 0.0, 0.0, 0.0, 0.0, 0.0];
        let detector = EquilibrationDetector::with_components(
            FixedTrendTest::new(0.5),
            FirstSampleSlope,
            SequentialEngine,
            EquilibrationParameters::new(3),
        )
        .unwrap();

        let result = detector.detect(&series(data)).unwrap();
        assert_eq!(result.slopes(), &[0.0, 0.0005, 0.01, 0.0, 0.0]);
        // Window 2 fails the slope criterion; centers are start + 1
        assert_eq!(result.equilibration_points(), &[1, 2, 4, 5]);
    }

    #[test]
    fn test_significant_trend_blocks_equilibration() {
        let detector = EquilibrationDetector::with_components(
            FixedTrendTest::new(0.01),
            FirstSampleSlope,
            SequentialEngine,
            EquilibrationParameters::new(4),
        )
        .unwrap();

        let result = detector.detect(&series(vec![0.0; 12])).unwrap();
        assert_eq!(result.slopes().len(), 8);
        assert!(result.equilibration_points().is_empty());
    }

    #[test]
    fn test_each_window_tested_once() {
        let trend = FixedTrendTest::new(0.9);
        let detector = EquilibrationDetector::with_components(
            &trend,
            TheilSen,
            SequentialEngine,
            EquilibrationParameters::new(5),
        )
        .unwrap();

        detector.detect(&series(vec![1.0; 25])).unwrap();
        assert_eq!(trend.calls.load(Ordering::Relaxed), 20);
    }

    #[test]
    fn test_pairwise_slope_count() {
        assert_eq!(pairwise_slope_count(40, 10), 1800);
        assert_eq!(pairwise_slope_count(0, 10), 0);
        assert_eq!(pairwise_slope_count(usize::MAX, 20), usize::MAX);
        assert_eq!(pairwise_slope_count(3, usize::MAX), usize::MAX);
    }

    #[test]
    fn test_window_too_small_is_config_error() {
        for w in [0, 1, 2] {
            let err = EquilibrationDetector::with_window_size(w).unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)));
            assert!(matches!(detect(&series(vec![1.0; 10]), w), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_window_not_smaller_than_series_is_empty() {
        let detector = EquilibrationDetector::with_window_size(10).unwrap();
        for n in [1, 5, 10] {
            let result = detector.detect(&series(vec![2.0; n])).unwrap();
            assert!(result.slopes().is_empty());
            assert!(result.equilibration_points().is_empty());
            assert_eq!(result.sample_size(), n);
        }
    }

    #[test]
    fn test_capability_error_propagates() {
        let detector = EquilibrationDetector::with_components(
            MannKendall,
            FailingSlope,
            SequentialEngine,
            EquilibrationParameters::new(3),
        )
        .unwrap();
        let err = detector.detect(&series(vec![1.0; 6])).unwrap_err();
        assert!(matches!(err, Error::Computation(_)));
    }

    #[test]
    fn test_cancelled_token_stops_scan() {
        let detector = EquilibrationDetector::with_window_size(5).unwrap();
        let token = CancellationToken::new();
        token.cancel();
        let err = detector
            .detect_with_cancellation(&series(vec![1.0; 30]), &token)
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled { windows_completed: 0 }));
    }

    #[test]
    fn test_uncancelled_token_matches_plain_detect() {
        let data: Vec<f64> = (0..60).map(|i| (i as f64 * 0.3).sin()).collect();
        let s = series(data);
        let detector = EquilibrationDetector::with_window_size(8).unwrap();
        let plain = detector.detect(&s).unwrap();
        let with_token = detector
            .detect_with_cancellation(&s, &CancellationToken::new())
            .unwrap();
        assert_eq!(plain, with_token);
    }

    #[test]
    fn test_visualizer_sees_every_window() {
        let detector = EquilibrationDetector::with_window_size(4).unwrap();
        let mut viz = RecordingVisualizer::new();
        let s = series((0..10).map(|i| i as f64).collect());

        let result = detector.detect_with_visualizer(&s, None, &mut viz).unwrap();

        assert_eq!(viz.sample_size(), Some(10));
        assert_eq!(viz.params().map(|p| p.window_size), Some(4));
        let starts: Vec<usize> = viz.windows().iter().map(|w| w.start_index).collect();
        assert_eq!(starts, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(viz.result(), Some(&result));
    }

    #[test]
    fn test_analyze_windows_agrees_with_detect() {
        let data: Vec<f64> = (0..40)
            .map(|i| if i < 20 { i as f64 * 0.1 } else { 2.0 })
            .collect();
        let s = series(data);
        let detector = EquilibrationDetector::with_window_size(6).unwrap();

        let windows = detector.analyze_windows(&s).unwrap();
        let result = detector.detect(&s).unwrap();
        assert_eq!(DetectionResult::from_windows(&windows, 6, s.len()), result);
        assert!(windows.iter().all(|w| w.center_index == w.start_index + 3));
    }
}
