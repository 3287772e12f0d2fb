//! Record error type.
//!
//! Every way a record can fail to build (a missing required field, a field
//! of the wrong type, an enumeration value outside its set) surfaces as the
//! same error, tagged with the kind of record being built.

use std::fmt;

/// A record could not be built from the data supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} record: {reason}")]
pub struct InvalidRecord {
    kind: &'static str,
    reason: String,
}

impl InvalidRecord {
    /// Create an error for a record of the given kind.
    pub fn new(kind: &'static str, reason: impl fmt::Display) -> Self {
        Self {
            kind,
            reason: reason.to_string(),
        }
    }

    /// Name of the record kind that failed, e.g. `"Airport"`.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Human-readable cause, e.g. ``missing field `station` ``.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
