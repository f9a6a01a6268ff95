//! Data module - CSV loading and derived-series computation

mod loader;
mod processor;

pub use loader::{DataLoader, LoaderError, EXPECTED_COLUMNS};
pub use processor::{DataProcessor, ImuSeries, SAMPLE_PERIOD_S};
