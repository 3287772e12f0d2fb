//! Dataset error types.

use std::path::PathBuf;

use crate::domain::InvalidRecord;

/// Errors that can occur when reading or writing a file of records.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// File could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contents are not valid JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is neither an object nor an array
    #[error("expected a record or a list of records, found {found}")]
    NotARecordList { found: &'static str },

    /// A record in the batch failed validation
    #[error("record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: InvalidRecord,
    },
}

/// Error returned when parsing an unknown entity kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entity kind `{0}`")]
pub struct UnknownEntityKind(pub String);
