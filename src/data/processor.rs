//! Data Processor Module
//! Derives the time axis and acceleration magnitude, and extracts the
//! per-channel series used by the stats and chart stages.

use polars::prelude::*;
use thiserror::Error;

/// Logger capture interval: 10 Hz, 0.1 s per sample.
pub const SAMPLE_PERIOD_S: f64 = 0.1;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// All channels of the log as time-aligned f64 vectors.
///
/// `time` and `accel_mag` are derived; the rest come straight from the CSV.
#[derive(Debug, Clone, Default)]
pub struct ImuSeries {
    pub time: Vec<f64>,
    pub accel_x: Vec<f64>,
    pub accel_y: Vec<f64>,
    pub accel_z: Vec<f64>,
    pub gyro_x: Vec<f64>,
    pub gyro_y: Vec<f64>,
    pub gyro_z: Vec<f64>,
    pub roll: Vec<f64>,
    pub pitch: Vec<f64>,
    pub accel_mag: Vec<f64>,
}

impl ImuSeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Handles column extraction and the derived-series computation.
pub struct DataProcessor;

impl DataProcessor {
    /// Extract one column as f64 values, dropping nulls.
    pub fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>, ProcessorError> {
        let series = df.column(name)?;
        let as_f64 = series.cast(&DataType::Float64)?;
        let ca = as_f64.f64()?;
        Ok(ca.into_iter().flatten().collect())
    }

    /// Elapsed time per sample, fixed 10 Hz capture.
    pub fn time_axis(sample: &[f64]) -> Vec<f64> {
        sample.iter().map(|s| s * SAMPLE_PERIOD_S).collect()
    }

    /// Euclidean norm of the three acceleration axes, in g.
    pub fn accel_magnitude(x: &[f64], y: &[f64], z: &[f64]) -> Vec<f64> {
        x.iter()
            .zip(y)
            .zip(z)
            .map(|((x, y), z)| (x * x + y * y + z * z).sqrt())
            .collect()
    }

    /// Pull every channel out of the frame and append the derived series.
    pub fn extract_series(df: &DataFrame) -> Result<ImuSeries, ProcessorError> {
        let sample = Self::column_values(df, "Sample")?;
        let accel_x = Self::column_values(df, "AccelX")?;
        let accel_y = Self::column_values(df, "AccelY")?;
        let accel_z = Self::column_values(df, "AccelZ")?;

        let time = Self::time_axis(&sample);
        let accel_mag = Self::accel_magnitude(&accel_x, &accel_y, &accel_z);

        Ok(ImuSeries {
            time,
            accel_x,
            accel_y,
            accel_z,
            gyro_x: Self::column_values(df, "GyroX")?,
            gyro_y: Self::column_values(df, "GyroY")?,
            gyro_z: Self::column_values(df, "GyroZ")?,
            roll: Self::column_values(df, "Roll")?,
            pitch: Self::column_values(df, "Pitch")?,
            accel_mag,
        })
    }
}
