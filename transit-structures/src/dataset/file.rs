//! Reading and writing files of records.
//!
//! A record file holds either a single JSON object or a JSON array of
//! objects. Reading is all-or-nothing: the first malformed record aborts
//! the read and its position is reported.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::error::DatasetError;
use crate::domain::Record;

/// Parse a JSON document into a list of records.
///
/// # Examples
///
/// ```
/// use transit_structures::dataset::parse_records;
/// use transit_structures::domain::Alliance;
///
/// let json = r#"[
///     {"name": "Star Alliance", "id": "star", "worldwide": true},
///     {"name": "Vanilla Alliance", "id": "vanilla"}
/// ]"#;
/// let alliances: Vec<Alliance> = parse_records(json).unwrap();
/// assert_eq!(alliances.len(), 2);
/// assert!(!alliances[1].worldwide);
/// ```
pub fn parse_records<T: Record>(json: &str) -> Result<Vec<T>, DatasetError> {
    split_records(json)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            T::from_value(value).map_err(|source| DatasetError::InvalidRecord { index, source })
        })
        .collect()
}

/// Read every record from a file.
pub fn read_records<T: Record>(path: impl AsRef<Path>) -> Result<Vec<T>, DatasetError> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    let records = parse_records(&contents)?;

    debug!(
        path = %path.display(),
        kind = T::KIND,
        count = records.len(),
        "Read records"
    );

    Ok(records)
}

/// Write records to a file as a pretty-printed JSON array.
///
/// Creates parent directories if they don't exist.
pub fn write_records<T: Record>(path: impl AsRef<Path>, records: &[T]) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let io_error = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).map_err(io_error)?;

    debug!(
        path = %path.display(),
        kind = T::KIND,
        count = records.len(),
        "Wrote records"
    );

    Ok(())
}

pub(super) fn read_file(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Split a document into its top-level record values.
pub(super) fn split_records(json: &str) -> Result<Vec<Value>, DatasetError> {
    match serde_json::from_str(json)? {
        Value::Array(values) => Ok(values),
        value @ Value::Object(_) => Ok(vec![value]),
        other => Err(DatasetError::NotARecordList {
            found: describe(&other),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Airport, Station, StationType, fixtures};
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn parse_single_object() {
        let json = fixtures::hkg_airport().to_string();
        let airports: Vec<Airport> = parse_records(&json).unwrap();
        assert_eq!(airports.len(), 1);
        assert_eq!(airports[0].code, "HKG");
    }

    #[test]
    fn parse_array() {
        let json = json!([fixtures::hkg_airport(), fixtures::sin_airport()]).to_string();
        let airports: Vec<Airport> = parse_records(&json).unwrap();
        let codes: Vec<_> = airports.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, ["HKG", "SIN"]);
    }

    #[test]
    fn parse_empty_array() {
        let airports: Vec<Airport> = parse_records("[]").unwrap();
        assert!(airports.is_empty());
    }

    #[test]
    fn parse_reports_first_bad_index() {
        let mut bad = fixtures::sin_airport();
        bad.as_object_mut().unwrap().remove("station");
        let json = json!([fixtures::hkg_airport(), bad.clone(), bad]).to_string();

        match parse_records::<Airport>(&json) {
            Err(DatasetError::InvalidRecord { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source.kind(), "Airport");
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_scalars() {
        assert!(matches!(
            parse_records::<Station>("42"),
            Err(DatasetError::NotARecordList { found: "a number" })
        ));
        assert!(matches!(
            parse_records::<Station>("null"),
            Err(DatasetError::NotARecordList { found: "null" })
        ));
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(matches!(
            parse_records::<Station>("[{"),
            Err(DatasetError::Json(_))
        ));
    }

    #[test]
    fn write_and_read_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        let stations = vec![
            Station::new("Central", StationType::Metro, 22.28, 114.16, "Hong Kong", "Hong Kong"),
            Station::new("Tsim Sha Tsui Pier", StationType::Port, 22.29, 114.17, "Hong Kong", "Hong Kong"),
        ];

        write_records(&path, &stations).unwrap();
        let loaded: Vec<Station> = read_records(&path).unwrap();
        assert_eq!(loaded, stations);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("airports.json");
        let airports = vec![Airport::from_value(fixtures::hkg_airport()).unwrap()];

        write_records(&path, &airports).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn read_missing_file() {
        let err = read_records::<Station>("/nonexistent/path/stations.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
