//! Files of records.
//!
//! Reads and writes JSON files holding one record or a list of records of
//! a single kind, and validates such files record by record.

mod check;
mod error;
mod file;

pub use check::{BatchReport, EntityKind, check_records};
pub use error::{DatasetError, UnknownEntityKind};
pub use file::{parse_records, read_records, write_records};
