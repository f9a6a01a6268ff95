//! Statistics Calculator Module
//! Descriptive statistics over the extracted channel series.

use statrs::statistics::Statistics;
use thiserror::Error;

use crate::data::{ImuSeries, SAMPLE_PERIOD_S};

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("no samples to summarize")]
    Empty,
}

/// min/max/mean for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisStats {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Everything the console report prints.
#[derive(Debug, Clone)]
pub struct AnalysisSummary {
    pub sample_count: usize,
    /// Elapsed time of the last sample, in seconds.
    pub duration_s: f64,
    /// Effective rate, `count / duration`.
    pub sample_rate_hz: f64,
    pub accel: [AxisStats; 3],
    pub gyro: [AxisStats; 3],
    pub angles: [AxisStats; 2],
}

/// Handles the per-axis aggregation.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute min/max/mean for one channel.
    pub fn axis_stats(label: &'static str, values: &[f64]) -> AxisStats {
        if values.is_empty() {
            return AxisStats {
                label,
                min: f64::NAN,
                max: f64::NAN,
                mean: f64::NAN,
            };
        }

        AxisStats {
            label,
            min: values.min(),
            max: values.max(),
            mean: values.mean(),
        }
    }

    /// Aggregate every channel plus duration and effective sample rate.
    pub fn summarize(series: &ImuSeries) -> Result<AnalysisSummary, StatsError> {
        let sample_count = series.len();
        if sample_count == 0 {
            return Err(StatsError::Empty);
        }

        let duration_s = series.time.last().copied().unwrap_or(0.0);
        // A single sample has zero elapsed time; fall back to the nominal rate
        let sample_rate_hz = if duration_s > 0.0 {
            sample_count as f64 / duration_s
        } else {
            1.0 / SAMPLE_PERIOD_S
        };

        Ok(AnalysisSummary {
            sample_count,
            duration_s,
            sample_rate_hz,
            accel: [
                Self::axis_stats("X", &series.accel_x),
                Self::axis_stats("Y", &series.accel_y),
                Self::axis_stats("Z", &series.accel_z),
            ],
            gyro: [
                Self::axis_stats("X", &series.gyro_x),
                Self::axis_stats("Y", &series.gyro_y),
                Self::axis_stats("Z", &series.gyro_z),
            ],
            angles: [
                Self::axis_stats("Roll", &series.roll),
                Self::axis_stats("Pitch", &series.pitch),
            ],
        })
    }
}
