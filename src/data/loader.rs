//! CSV Data Loader Module
//! Loads the data-logger CSV with Polars and validates the expected header.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Header written by the microcontroller logger, in column order.
pub const EXPECTED_COLUMNS: [&str; 9] = [
    "Sample", "AccelX", "AccelY", "AccelZ", "GyroX", "GyroY", "GyroZ", "Roll", "Pitch",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("file '{0}' not found")]
    FileNotFound(String),
    #[error("column not found: {0}")]
    MissingColumn(String),
    #[error("failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("no data loaded")]
    NoData,
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file and check that every expected column is present.
    pub fn load_csv(file_path: &str) -> Result<DataFrame, LoaderError> {
        if !Path::new(file_path).exists() {
            return Err(LoaderError::FileNotFound(file_path.to_string()));
        }

        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;

        let columns = df.get_column_names();
        for expected in EXPECTED_COLUMNS {
            if !columns.iter().any(|name| name.as_str() == expected) {
                return Err(LoaderError::MissingColumn(expected.to_string()));
            }
        }

        if df.height() == 0 {
            return Err(LoaderError::NoData);
        }

        Ok(df)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    const HEADER: &str = "Sample,AccelX,AccelY,AccelZ,GyroX,GyroY,GyroZ,Roll,Pitch";

    fn fixture(name: &str, contents: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("mpu_loader_{}_{}.csv", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_well_formed_file() {
        let path = fixture(
            "ok",
            &format!(
                "{HEADER}\n0,0.0,0.0,1.0,0.1,-0.2,0.3,1.5,-2.5\n1,0.01,0.02,0.99,0.0,0.0,0.0,1.6,-2.4\n"
            ),
        );
        let df = DataLoader::load_csv(path.to_str().unwrap()).unwrap();
        assert_eq!(df.height(), 2);
        for column in EXPECTED_COLUMNS {
            assert!(df.column(column).is_ok());
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_reported() {
        let err = DataLoader::load_csv("/nonexistent/mpu_data.csv").unwrap_err();
        assert!(matches!(err, LoaderError::FileNotFound(_)));
    }

    #[test]
    fn missing_column_names_the_column() {
        let path = fixture(
            "nopitch",
            "Sample,AccelX,AccelY,AccelZ,GyroX,GyroY,GyroZ,Roll\n0,0,0,1,0,0,0,0\n",
        );
        let err = DataLoader::load_csv(path.to_str().unwrap()).unwrap_err();
        match err {
            LoaderError::MissingColumn(column) => assert_eq!(column, "Pitch"),
            other => panic!("unexpected error: {other}"),
        }
        fs::remove_file(path).ok();
    }

    #[test]
    fn header_only_file_has_no_data() {
        let path = fixture("empty", &format!("{HEADER}\n"));
        let err = DataLoader::load_csv(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoaderError::NoData));
        fs::remove_file(path).ok();
    }
}
