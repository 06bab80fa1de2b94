//! Detect equilibration on a synthetic temperature random walk
//!
//! Run with `RUST_LOG=debug` to see the scan setup and cost estimate.
//! An optional first argument names the CSV report to write.

use anyhow::Result;
use robust_equilibration::test_data::RandomWalk;
use robust_equilibration::{
    EquilibrationDetector, EquilibrationParameters, EquilibrationReport, EquilibrationSummary,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let walk = RandomWalk::default();
    let series = walk.generate()?;
    info!(
        points = series.len(),
        base = walk.base,
        noise = walk.noise_scale,
        seed = walk.seed,
        "generated random walk"
    );

    let detector = EquilibrationDetector::new(EquilibrationParameters::new(20))?;
    let result = detector.detect(&series)?;
    println!("{result}");

    match EquilibrationSummary::from_detection(&series, &result, 1)? {
        Some(summary) => println!("{summary}"),
        None => println!("No equilibration detected"),
    }

    let report_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "equilibration_report.csv".to_string());
    EquilibrationReport::new(&series, &result)?.write_csv_path(&report_path)?;
    info!(path = %report_path, "report written");

    Ok(())
}
