//! Visualization interface for equilibration detection
//!
//! The detector calls these hooks while it scans so that plotting or
//! reporting layers can observe every window without the detector depending
//! on any rendering library. The null visualizer compiles to no-ops.

use crate::params::EquilibrationParameters;
use crate::types::{DetectionResult, WindowResult};
use robust_core::{Result, Series};

/// Trait for observing the stages of equilibration detection
pub trait EquilibrationVisualizer {
    /// Record the input series before analysis begins
    fn record_series(&mut self, series: &Series) -> Result<()>;

    /// Record the thresholds the windows are classified against
    fn record_parameters(&mut self, params: &EquilibrationParameters) -> Result<()>;

    /// Record one analyzed window; called in scan order
    fn record_window(&mut self, window: &WindowResult) -> Result<()>;

    /// Record the final result
    fn record_result(&mut self, result: &DetectionResult) -> Result<()>;

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that performs no operations
#[derive(Default, Clone, Copy, Debug)]
pub struct NullEquilibrationVisualizer;

impl EquilibrationVisualizer for NullEquilibrationVisualizer {
    #[inline(always)]
    fn record_series(&mut self, _: &Series) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_parameters(&mut self, _: &EquilibrationParameters) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_window(&mut self, _: &WindowResult) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn record_result(&mut self, _: &DetectionResult) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

/// Visualizer that keeps everything it is shown, for later inspection
#[derive(Default, Clone, Debug)]
pub struct RecordingVisualizer {
    sample_size: Option<usize>,
    params: Option<EquilibrationParameters>,
    windows: Vec<WindowResult>,
    result: Option<DetectionResult>,
}

impl RecordingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the last recorded series
    pub fn sample_size(&self) -> Option<usize> {
        self.sample_size
    }

    pub fn params(&self) -> Option<&EquilibrationParameters> {
        self.params.as_ref()
    }

    /// Windows in scan order
    pub fn windows(&self) -> &[WindowResult] {
        &self.windows
    }

    /// p-values in scan order
    pub fn p_values(&self) -> Vec<f64> {
        self.windows.iter().map(|w| w.p_value).collect()
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        self.result.as_ref()
    }
}

impl EquilibrationVisualizer for RecordingVisualizer {
    fn record_series(&mut self, series: &Series) -> Result<()> {
        self.sample_size = Some(series.len());
        self.windows.clear();
        self.result = None;
        Ok(())
    }

    fn record_parameters(&mut self, params: &EquilibrationParameters) -> Result<()> {
        self.params = Some(*params);
        Ok(())
    }

    fn record_window(&mut self, window: &WindowResult) -> Result<()> {
        self.windows.push(*window);
        Ok(())
    }

    fn record_result(&mut self, result: &DetectionResult) -> Result<()> {
        self.result = Some(result.clone());
        Ok(())
    }
}
