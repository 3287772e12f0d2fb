//! Record types for the transport network.
//!
//! A generic [`Station`] carries location and kind; air, rail and metro
//! records embed or reference it. Records are plain values: they are built
//! whole (from JSON via [`Record`], or with their `new` constructors) and
//! never mutated by this crate. References between records are shared
//! through `Arc` and never imply ownership of the referenced chain.

mod air;
mod error;
mod metro;
mod rail;
mod record;
mod station;
mod time;

#[cfg(test)]
pub(crate) mod fixtures;

pub use air::{Airline, Airport, AirportType, Alliance, Flight};
pub use error::InvalidRecord;
pub use metro::{MetroLine, MetroLineBranch, MetroStation, MetroType, ServicePeriod};
pub use rail::{Train, TrainCarrier, TrainStation, TrainStop, TrainType};
pub use record::Record;
pub use station::{Station, StationType};
pub use time::{ClockTime, TimeError};
