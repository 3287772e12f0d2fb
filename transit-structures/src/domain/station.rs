//! Generic station record shared by every mode of transport.

use serde::{Deserialize, Serialize, Serializer};

use super::Record;
use super::record::schema_enum;

/// Kind of transport a station serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationType {
    Airport,
    Train,
    Metro,
    Bus,
    Port,
}

schema_enum!(StationType {
    Airport => "airport",
    Train => "train",
    Metro => "metro",
    Bus => "bus",
    Port => "port",
});

/// A point of access to the transport network.
///
/// Mode-specific records (airports, train stations, metro stations) embed
/// one of these for their location and kind.
///
/// # Examples
///
/// ```
/// use transit_structures::domain::{Station, StationType};
///
/// let central = Station::new("Central", StationType::Metro, 22.28, 114.16, "Hong Kong", "Hong Kong");
/// assert_eq!(central.station_type.as_str(), "metro");
/// ```
///
/// Coordinates must be finite. JSON has no NaN or infinity, so writing a
/// station with a non-finite coordinate fails rather than emitting `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    #[serde(rename = "type")]
    pub station_type: StationType,
    #[serde(serialize_with = "finite")]
    pub latitude: f64,
    #[serde(serialize_with = "finite")]
    pub longitude: f64,
    pub city: String,
    pub country: String,
}

impl Station {
    pub fn new(
        name: impl Into<String>,
        station_type: StationType,
        latitude: f64,
        longitude: f64,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            station_type,
            latitude,
            longitude,
            city: city.into(),
            country: country.into(),
        }
    }
}

impl Record for Station {
    const KIND: &'static str = "Station";
}

fn finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "coordinate must be finite, got {value}"
        )));
    }
    serializer.serialize_f64(*value)
}
