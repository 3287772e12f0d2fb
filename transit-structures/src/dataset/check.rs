//! Batch validation of record files.
//!
//! Unlike [`read_records`](super::read_records), checking keeps going past
//! a malformed record: each record is validated on its own and every
//! failure is reported.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use super::error::{DatasetError, UnknownEntityKind};
use super::file::{read_file, split_records};
use crate::domain::{
    Airline, Airport, Alliance, Flight, InvalidRecord, MetroLine, MetroLineBranch, MetroStation,
    Record, Station, Train, TrainCarrier, TrainStation,
};

/// Outcome of validating a batch of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    /// Number of records that validated.
    pub valid: usize,
    /// Position and cause of every record that did not.
    pub failures: Vec<(usize, InvalidRecord)>,
}

impl BatchReport {
    /// Total number of records checked.
    pub fn total(&self) -> usize {
        self.valid + self.failures.len()
    }

    /// Returns true if every record validated.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validate every record in a JSON document as a `T`.
///
/// Only document-level problems (not JSON, not an object or array) are
/// returned as errors; malformed records are collected in the report.
pub fn check_records<T: Record>(json: &str) -> Result<BatchReport, DatasetError> {
    let mut report = BatchReport::default();

    for (index, value) in split_records(json)?.into_iter().enumerate() {
        match T::from_value(value) {
            Ok(_) => report.valid += 1,
            Err(e) => {
                trace!(index, error = %e, "Record failed validation");
                report.failures.push((index, e));
            }
        }
    }

    debug!(
        kind = T::KIND,
        valid = report.valid,
        invalid = report.failures.len(),
        "Checked records"
    );

    Ok(report)
}

/// The kinds of record a dataset file can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Station,
    Airport,
    Flight,
    Airline,
    Alliance,
    TrainStation,
    TrainCarrier,
    Train,
    MetroStation,
    MetroLine,
    MetroLineBranch,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Station,
        EntityKind::Airport,
        EntityKind::Flight,
        EntityKind::Airline,
        EntityKind::Alliance,
        EntityKind::TrainStation,
        EntityKind::TrainCarrier,
        EntityKind::Train,
        EntityKind::MetroStation,
        EntityKind::MetroLine,
        EntityKind::MetroLineBranch,
    ];

    /// The name used on the command line, e.g. `train_station`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Station => "station",
            EntityKind::Airport => "airport",
            EntityKind::Flight => "flight",
            EntityKind::Airline => "airline",
            EntityKind::Alliance => "alliance",
            EntityKind::TrainStation => "train_station",
            EntityKind::TrainCarrier => "train_carrier",
            EntityKind::Train => "train",
            EntityKind::MetroStation => "metro_station",
            EntityKind::MetroLine => "metro_line",
            EntityKind::MetroLineBranch => "metro_line_branch",
        }
    }

    /// Validate a JSON document as records of this kind.
    pub fn check(&self, json: &str) -> Result<BatchReport, DatasetError> {
        match self {
            EntityKind::Station => check_records::<Station>(json),
            EntityKind::Airport => check_records::<Airport>(json),
            EntityKind::Flight => check_records::<Flight>(json),
            EntityKind::Airline => check_records::<Airline>(json),
            EntityKind::Alliance => check_records::<Alliance>(json),
            EntityKind::TrainStation => check_records::<TrainStation>(json),
            EntityKind::TrainCarrier => check_records::<TrainCarrier>(json),
            EntityKind::Train => check_records::<Train>(json),
            EntityKind::MetroStation => check_records::<MetroStation>(json),
            EntityKind::MetroLine => check_records::<MetroLine>(json),
            EntityKind::MetroLineBranch => check_records::<MetroLineBranch>(json),
        }
    }

    /// Validate a file as records of this kind.
    pub fn check_file(&self, path: impl AsRef<Path>) -> Result<BatchReport, DatasetError> {
        let path = path.as_ref();
        let contents = read_file(path)?;
        debug!(path = %path.display(), kind = self.as_str(), "Checking file");
        self.check(&contents)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = UnknownEntityKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEntityKind(s.to_string()))
    }
}
