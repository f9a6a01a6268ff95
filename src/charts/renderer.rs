//! Static Chart Renderer
//! Draws the four diagnostic charts into one 2x2 grid figure and writes it
//! out as a PNG.
//!
//! Layout:
//! 1. Figure title: "MPU6050 Data Analysis" centered
//! 2. Top row: acceleration vs time, gyroscope vs time
//! 3. Bottom row: roll/pitch vs time, acceleration magnitude vs time with a
//!    dashed 1 g reference line

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;
use thiserror::Error as ThisError;

use crate::data::ImuSeries;

/// 15x10 in figure at 300 DPI.
const FIGURE_SIZE: (u32, u32) = (4500, 3000);
/// Height reserved for the figure title.
const TITLE_BAND_PX: i32 = 160;
/// Expected magnitude for a device at rest, in g.
const GRAVITY_REFERENCE_G: f64 = 1.0;

const PURPLE: RGBColor = RGBColor(128, 0, 128);
const ORANGE: RGBColor = RGBColor(255, 165, 0);

#[derive(ThisError, Debug)]
pub enum ChartError {
    #[error("no samples to plot")]
    Empty,
    #[error("chart rendering failed: {0}")]
    Render(String),
}

/// One labeled line on a pane.
struct PlotSeries<'a> {
    values: &'a [f64],
    label: &'a str,
    color: RGBColor,
    width: u32,
}

/// Renders the analysis figure with plotters.
pub struct ChartRenderer;

impl ChartRenderer {
    /// Render the 2x2 grid and persist it at `path`.
    pub fn render(series: &ImuSeries, path: &Path) -> Result<(), ChartError> {
        if series.is_empty() {
            return Err(ChartError::Empty);
        }
        Self::draw_figure(series, path).map_err(|e| ChartError::Render(e.to_string()))
    }

    fn draw_figure(series: &ImuSeries, path: &Path) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let title_style = ("sans-serif", 96)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw_text(
            "MPU6050 Data Analysis",
            &title_style,
            ((FIGURE_SIZE.0 / 2) as i32, 30),
        )?;

        let (_, grid) = root.split_vertically(TITLE_BAND_PX);
        let panes = grid.split_evenly((2, 2));

        Self::draw_pane(
            &panes[0],
            "Acceleration (g)",
            "Acceleration (g)",
            &series.time,
            &[
                PlotSeries {
                    values: &series.accel_x,
                    label: "AccelX",
                    color: RED,
                    width: 3,
                },
                PlotSeries {
                    values: &series.accel_y,
                    label: "AccelY",
                    color: GREEN,
                    width: 3,
                },
                PlotSeries {
                    values: &series.accel_z,
                    label: "AccelZ",
                    color: BLUE,
                    width: 3,
                },
            ],
            None,
        )?;

        Self::draw_pane(
            &panes[1],
            "Gyroscope (deg/s)",
            "Angular Velocity (deg/s)",
            &series.time,
            &[
                PlotSeries {
                    values: &series.gyro_x,
                    label: "GyroX",
                    color: RED,
                    width: 3,
                },
                PlotSeries {
                    values: &series.gyro_y,
                    label: "GyroY",
                    color: GREEN,
                    width: 3,
                },
                PlotSeries {
                    values: &series.gyro_z,
                    label: "GyroZ",
                    color: BLUE,
                    width: 3,
                },
            ],
            None,
        )?;

        Self::draw_pane(
            &panes[2],
            "Orientation Angles (deg)",
            "Angle (deg)",
            &series.time,
            &[
                PlotSeries {
                    values: &series.roll,
                    label: "Roll",
                    color: PURPLE,
                    width: 4,
                },
                PlotSeries {
                    values: &series.pitch,
                    label: "Pitch",
                    color: ORANGE,
                    width: 4,
                },
            ],
            None,
        )?;

        Self::draw_pane(
            &panes[3],
            "Acceleration Magnitude",
            "Magnitude (g)",
            &series.time,
            &[PlotSeries {
                values: &series.accel_mag,
                label: "Magnitude",
                color: BLACK,
                width: 4,
            }],
            Some((GRAVITY_REFERENCE_G, "1g reference")),
        )?;

        root.present()?;
        Ok(())
    }

    fn draw_pane(
        area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
        title: &str,
        y_desc: &str,
        time: &[f64],
        series: &[PlotSeries],
        reference: Option<(f64, &str)>,
    ) -> Result<(), Box<dyn Error>> {
        let x_first = time.first().copied().unwrap_or(0.0);
        let x_last = time.last().copied().unwrap_or(1.0);
        let (x_min, x_max) = Self::pad_range(x_first, x_last);

        let (y_low, y_high) = Self::value_extent(series, reference.map(|(level, _)| level));
        let (y_min, y_max) = Self::pad_range(y_low, y_high);

        let mut chart = ChartBuilder::on(area)
            .caption(title, ("sans-serif", 56))
            .margin(24)
            .x_label_area_size(100)
            .y_label_area_size(130)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Time (s)")
            .y_desc(y_desc)
            .label_style(("sans-serif", 34))
            .axis_desc_style(("sans-serif", 40))
            .draw()?;

        for line in series {
            let color = line.color;
            let style = ShapeStyle {
                color: color.to_rgba(),
                filled: false,
                stroke_width: line.width,
            };
            chart
                .draw_series(LineSeries::new(
                    time.iter().copied().zip(line.values.iter().copied()),
                    style,
                ))?
                .label(line.label)
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 50, y)],
                        ShapeStyle {
                            color: color.to_rgba(),
                            filled: false,
                            stroke_width: 4,
                        },
                    )
                });
        }

        if let Some((level, label)) = reference {
            chart
                .draw_series(DashedLineSeries::new(
                    [(x_min, level), (x_max, level)],
                    18,
                    12,
                    ShapeStyle {
                        color: RED.to_rgba(),
                        filled: false,
                        stroke_width: 3,
                    },
                ))?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 50, y)],
                        ShapeStyle {
                            color: RED.to_rgba(),
                            filled: false,
                            stroke_width: 4,
                        },
                    )
                });
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", 34))
            .draw()?;

        Ok(())
    }

    /// Min/max over every plotted value, including the reference line so it
    /// stays inside the axis.
    fn value_extent(series: &[PlotSeries], reference: Option<f64>) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for line in series {
            for &v in line.values {
                if v.is_finite() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        if let Some(level) = reference {
            min = min.min(level);
            max = max.max(level);
        }
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 1.0);
        }
        (min, max)
    }

    fn pad_range(min_val: f64, max_val: f64) -> (f64, f64) {
        let range = (max_val - min_val).abs();
        let padding = if range < 1e-6 { 0.5 } else { range * 0.05 };
        (min_val - padding, max_val + padding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_range_expands_both_ends() {
        let (lo, hi) = ChartRenderer::pad_range(0.0, 10.0);
        assert!(lo < 0.0 && hi > 10.0);
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);
    }

    #[test]
    fn pad_range_handles_flat_series() {
        // A constant channel must still yield a non-empty axis range
        let (lo, hi) = ChartRenderer::pad_range(1.0, 1.0);
        assert!(lo < hi);
    }

    #[test]
    fn extent_includes_reference_level() {
        let values = [0.2, 0.3];
        let series = [PlotSeries {
            values: &values,
            label: "Magnitude",
            color: BLACK,
            width: 1,
        }];
        let (lo, hi) = ChartRenderer::value_extent(&series, Some(1.0));
        assert_eq!(lo, 0.2);
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn extent_ignores_non_finite_values() {
        let values = [f64::NAN, 2.0, -1.0];
        let series = [PlotSeries {
            values: &values,
            label: "GyroX",
            color: RED,
            width: 1,
        }];
        assert_eq!(ChartRenderer::value_extent(&series, None), (-1.0, 2.0));
    }

    #[test]
    fn extent_of_empty_series_falls_back() {
        assert_eq!(ChartRenderer::value_extent(&[], None), (0.0, 1.0));
    }

    #[test]
    fn empty_series_is_rejected() {
        let path = std::env::temp_dir().join("mpu_renderer_empty.png");
        let err = ChartRenderer::render(&ImuSeries::default(), &path).unwrap_err();
        assert!(matches!(err, ChartError::Empty));
    }
}
