//! Schema records for a multimodal transport network.
//!
//! Airports, flights, airlines and alliances; train stations, carriers and
//! trains; metro stations, lines and branches; and the generic station
//! they all share. Records are validated when built from JSON and carry
//! no behaviour beyond that.

pub mod dataset;
pub mod domain;
