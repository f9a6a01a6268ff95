//! MPU6050 Log Analyzer
//!
//! Loads the CSV captured by the microcontroller data logger, derives the
//! time axis and acceleration magnitude, prints summary statistics, and
//! renders the diagnostic charts to a PNG.

mod charts;
mod data;
mod report;
mod stats;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use log::info;

use charts::ChartRenderer;
use data::{DataLoader, DataProcessor};
use report::Reporter;
use stats::StatsCalculator;

/// CSV transferred from the microcontroller.
const INPUT_FILE: &str = "mpu_data.csv";
/// Rendered figure.
const OUTPUT_FILE: &str = "mpu6050_analysis.png";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let code = match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Reporter::print_failure(&err);
            ExitCode::FAILURE
        }
    };

    Reporter::print_usage(INPUT_FILE);
    code
}

fn run() -> Result<()> {
    let df = DataLoader::load_csv(INPUT_FILE)?;
    println!("Data loaded: {} samples", df.height());

    let series = DataProcessor::extract_series(&df)?;
    let summary = StatsCalculator::summarize(&series)?;
    println!("{}", Reporter::format_summary(&summary));

    info!("rendering {} samples to {}", series.len(), OUTPUT_FILE);
    ChartRenderer::render(&series, Path::new(OUTPUT_FILE))
        .context("failed to render the analysis figure")?;
    println!("\nPlot saved as: {}", OUTPUT_FILE);

    Ok(())
}
