//! Per-sample CSV report of a detection result

use crate::types::DetectionResult;
use robust_core::{Error, Result, Series};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// One row per sample of the analyzed series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportRow {
    pub index: usize,
    pub time: f64,
    pub value: f64,
    /// Slope of the window starting at this sample; empty for the last
    /// `window_size` samples
    pub slope: Option<f64>,
    /// Whether this sample is the center of an equilibrated window
    pub equilibration_point: bool,
}

/// Series and detection result aligned sample by sample
#[derive(Debug, Clone)]
pub struct EquilibrationReport {
    rows: Vec<ReportRow>,
}

impl EquilibrationReport {
    /// Align `result` with the series it was computed on
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if `result` was computed on a series of a
    /// different length.
    pub fn new(series: &Series, result: &DetectionResult) -> Result<Self> {
        if result.sample_size() != series.len() {
            return Err(Error::size_mismatch(
                series.len(),
                result.sample_size(),
                "detection result does not belong to this series",
            ));
        }

        let mut is_point = vec![false; series.len()];
        for &center in result.equilibration_points() {
            if let Some(flag) = is_point.get_mut(center) {
                *flag = true;
            }
        }

        let slopes = result.slopes();
        let rows = series
            .iter()
            .enumerate()
            .map(|(index, (time, value))| ReportRow {
                index,
                time,
                value,
                slope: slopes.get(index).copied(),
                equilibration_point: is_point[index],
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// `(time, slope)` pairs, each slope at its window's start time
    pub fn slope_series(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .filter_map(|row| row.slope.map(|slope| (row.time, slope)))
            .collect()
    }

    /// Times of the equilibrated window centers
    pub fn equilibration_times(&self) -> Vec<f64> {
        self.rows
            .iter()
            .filter(|row| row.equilibration_point)
            .map(|row| row.time)
            .collect()
    }

    /// Write the rows as CSV with a header line
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(row).map_err(report_error)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Write the rows as CSV to `path`, replacing any existing file
    pub fn write_csv_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_csv(BufWriter::new(file))?;
        debug!(path = %path.display(), rows = self.rows.len(), "wrote equilibration report");
        Ok(())
    }
}

fn report_error(err: csv::Error) -> Error {
    Error::Report(err.to_string())
}
