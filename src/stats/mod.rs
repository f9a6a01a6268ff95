//! Statistics module - descriptive aggregation for the report

mod calculator;

pub use calculator::{AnalysisSummary, AxisStats, StatsCalculator, StatsError};
