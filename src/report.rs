//! Console Report Module
//! Formats the summary statistics block, the failure remediation messages,
//! and the usage instructions.

use crate::data::{LoaderError, EXPECTED_COLUMNS};
use crate::stats::AnalysisSummary;

/// Formats and prints the human-readable console output.
pub struct Reporter;

impl Reporter {
    /// Summary block in the layout of the logger's companion script:
    /// 3 decimals for acceleration, 1 decimal for gyro and angles.
    pub fn format_summary(summary: &AnalysisSummary) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Duration: {:.1} seconds", summary.duration_s));
        lines.push(format!("Sample rate: {:.1} Hz", summary.sample_rate_hz));

        lines.push(String::new());
        lines.push("Acceleration statistics (g):".to_string());
        for axis in &summary.accel {
            lines.push(format!(
                "  {}: min={:.3}, max={:.3}, avg={:.3}",
                axis.label, axis.min, axis.max, axis.mean
            ));
        }

        lines.push(String::new());
        lines.push("Gyroscope statistics (deg/s):".to_string());
        for axis in &summary.gyro {
            lines.push(format!(
                "  {}: min={:.1}, max={:.1}, avg={:.1}",
                axis.label, axis.min, axis.max, axis.mean
            ));
        }

        lines.push(String::new());
        lines.push("Angle statistics (deg):".to_string());
        for axis in &summary.angles {
            lines.push(format!(
                "  {:<7}min={:.1}, max={:.1}, avg={:.1}",
                format!("{}:", axis.label),
                axis.min,
                axis.max,
                axis.mean
            ));
        }

        lines.join("\n")
    }

    /// Top-level failure report: missing file and missing column each get a
    /// remediation message, anything else a generic line.
    pub fn print_failure(err: &anyhow::Error) {
        match err.downcast_ref::<LoaderError>() {
            Some(LoaderError::FileNotFound(path)) => {
                println!("ERROR: File '{path}' not found!");
                println!();
                println!("Make sure to:");
                println!("1. Transfer CSV file from microcontroller using 't' command");
                println!("2. Copy data between markers and save as '{path}'");
                println!("3. Put file in same folder as this program");
            }
            Some(LoaderError::MissingColumn(column)) => {
                println!("ERROR: Column not found: {column}");
                println!("Check if CSV has correct header:");
                println!("{}", EXPECTED_COLUMNS.join(","));
            }
            _ => {
                println!("ERROR: {err}");
            }
        }
    }

    /// Printed on every exit path, success or failure.
    pub fn print_usage(input_file: &str) {
        println!();
        println!("USAGE INSTRUCTIONS:");
        println!("1. On microcontroller: press 't' -> type '{input_file}'");
        println!("2. Copy data between markers");
        println!("3. Paste in text file and save as '{input_file}'");
        println!("4. Run: mpu_analyzer");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::AxisStats;

    fn axis(label: &'static str, min: f64, max: f64, mean: f64) -> AxisStats {
        AxisStats {
            label,
            min,
            max,
            mean,
        }
    }

    fn summary() -> AnalysisSummary {
        AnalysisSummary {
            sample_count: 3,
            duration_s: 0.2,
            sample_rate_hz: 15.0,
            accel: [
                axis("X", 0.0, 0.0, 0.0),
                axis("Y", 0.0, 0.0, 0.0),
                axis("Z", 1.0, 1.0, 1.0),
            ],
            gyro: [
                axis("X", -1.25, 2.5, 0.5),
                axis("Y", 0.0, 0.0, 0.0),
                axis("Z", 0.0, 0.0, 0.0),
            ],
            angles: [axis("Roll", -3.0, 3.0, 0.0), axis("Pitch", 0.0, 9.9, 5.0)],
        }
    }

    #[test]
    fn summary_layout_is_stable() {
        let text = Reporter::format_summary(&summary());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Duration: 0.2 seconds");
        assert_eq!(lines[1], "Sample rate: 15.0 Hz");
        assert_eq!(lines[3], "Acceleration statistics (g):");
        assert_eq!(lines[6], "  Z: min=1.000, max=1.000, avg=1.000");
        assert_eq!(lines[8], "Gyroscope statistics (deg/s):");
        assert_eq!(lines[9], "  X: min=-1.2, max=2.5, avg=0.5");
        assert_eq!(lines[13], "Angle statistics (deg):");
        assert_eq!(lines[14], "  Roll:  min=-3.0, max=3.0, avg=0.0");
        assert_eq!(lines[15], "  Pitch: min=0.0, max=9.9, avg=5.0");
    }

    #[test]
    fn acceleration_uses_three_decimals() {
        let text = Reporter::format_summary(&summary());
        assert!(text.contains("min=0.000, max=0.000, avg=0.000"));
    }
}
