pub mod records;
pub mod stats;

pub use records::*;

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Reads a headered CSV file into typed records.
pub fn read_csv<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, DatasetError> {
    let path = path.as_ref();
    let wrap = |source| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(wrap)?;
    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        entity: String,
        year: i32,
        value: Option<f64>,
    }

    #[test]
    fn typed_rows_from_headered_csv() {
        let data = "entity,year,value\nDenmark,2010,32.6\nDenmark,2023,\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Row> = reader.deserialize().map(|row| row.unwrap()).collect();
        assert_eq!(
            rows,
            vec![
                Row {
                    entity: "Denmark".into(),
                    year: 2010,
                    value: Some(32.6)
                },
                Row {
                    entity: "Denmark".into(),
                    year: 2023,
                    value: None
                },
            ]
        );
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_csv::<Row>("no_such_dir/rows.csv").unwrap_err();
        assert!(err.to_string().contains("no_such_dir/rows.csv"));
    }
}
