//! Types produced by equilibration detection

use std::fmt;

/// Outcome of analyzing a single window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowResult {
    /// Index of the first sample in the window
    pub start_index: usize,
    /// `start_index + window_size / 2`
    pub center_index: usize,
    /// Two-sided p-value of the trend test
    pub p_value: f64,
    /// Robust slope estimate, in value units per sample
    pub slope: f64,
    /// Whether the window passed both equilibration criteria
    pub equilibrated: bool,
}

impl fmt::Display for WindowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Window {{ start: {}, center: {}, p: {:.4}, slope: {:.6}, equilibrated: {} }}",
            self.start_index, self.center_index, self.p_value, self.slope, self.equilibrated
        )
    }
}

/// Result of equilibration detection over a whole series
///
/// `slopes[k]` belongs to the window that starts at sample `k`, so it aligns
/// with `series.times()[k]`, not with the window center.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    equilibration_points: Vec<usize>,
    slopes: Vec<f64>,
    window_size: usize,
    sample_size: usize,
}

impl DetectionResult {
    /// Create a new detection result
    pub fn new(
        equilibration_points: Vec<usize>,
        slopes: Vec<f64>,
        window_size: usize,
        sample_size: usize,
    ) -> Self {
        Self {
            equilibration_points,
            slopes,
            window_size,
            sample_size,
        }
    }

    /// Result with no windows (window larger than the series)
    pub fn empty(window_size: usize, sample_size: usize) -> Self {
        Self::new(Vec::new(), Vec::new(), window_size, sample_size)
    }

    /// Build from per-window results in scan order
    pub fn from_windows(windows: &[WindowResult], window_size: usize, sample_size: usize) -> Self {
        let equilibration_points = windows
            .iter()
            .filter(|w| w.equilibrated)
            .map(|w| w.center_index)
            .collect();
        let slopes = windows.iter().map(|w| w.slope).collect();
        Self::new(equilibration_points, slopes, window_size, sample_size)
    }

    /// Center indices of equilibrated windows, strictly increasing
    pub fn equilibration_points(&self) -> &[usize] {
        &self.equilibration_points
    }

    /// One slope per window, in scan order
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Length of the analyzed series
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of windows scanned
    pub fn window_count(&self) -> usize {
        self.slopes.len()
    }

    /// Earliest equilibrated window center, if any
    pub fn first_equilibration_point(&self) -> Option<usize> {
        self.equilibration_points.first().copied()
    }

    /// Check if any window was classified as equilibrated
    pub fn has_equilibration(&self) -> bool {
        !self.equilibration_points.is_empty()
    }

    /// Decompose into `(equilibration_points, slopes)`
    pub fn into_parts(self) -> (Vec<usize>, Vec<f64>) {
        (self.equilibration_points, self.slopes)
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Equilibration Detection Result:")?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Window size: {}", self.window_size)?;
        writeln!(f, "  Windows scanned: {}", self.window_count())?;
        writeln!(f, "  Equilibrated windows: {}", self.equilibration_points.len())?;

        if let Some(first) = self.first_equilibration_point() {
            writeln!(f, "  First equilibration point: {}", first)?;
        }

        Ok(())
    }
}
