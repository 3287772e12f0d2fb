//! Shared construction and interchange entry points for records.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::InvalidRecord;

/// A schema record that can be built from, and written to, JSON.
///
/// Building a record from JSON is the validating path: required fields must
/// be present and well-typed, enumeration fields must hold one of their
/// fixed values, and absent optional fields take their defaults. Unknown
/// extra fields are ignored.
///
/// # Examples
///
/// ```
/// use transit_structures::domain::{Record, Station, StationType};
///
/// let json = r#"{
///     "name": "Central", "type": "metro",
///     "latitude": 22.28, "longitude": 114.16,
///     "city": "Hong Kong", "country": "Hong Kong"
/// }"#;
/// let station = Station::from_json(json).unwrap();
/// assert_eq!(station.station_type, StationType::Metro);
///
/// let bad = json.replace("metro", "spaceport");
/// assert!(Station::from_json(&bad).is_err());
/// ```
pub trait Record: Serialize + DeserializeOwned {
    /// Name of the record kind, used in error messages.
    const KIND: &'static str;

    /// Build a record from a JSON document.
    fn from_json(json: &str) -> Result<Self, InvalidRecord> {
        serde_json::from_str(json).map_err(|e| InvalidRecord::new(Self::KIND, e))
    }

    /// Build a record from an already-parsed JSON value.
    fn from_value(value: serde_json::Value) -> Result<Self, InvalidRecord> {
        serde_json::from_value(value).map_err(|e| InvalidRecord::new(Self::KIND, e))
    }

    /// Serialize to compact JSON.
    fn to_json(&self) -> Result<String, InvalidRecord> {
        serde_json::to_string(self).map_err(|e| InvalidRecord::new(Self::KIND, e))
    }

    /// Serialize to indented JSON.
    fn to_json_pretty(&self) -> Result<String, InvalidRecord> {
        serde_json::to_string_pretty(self).map_err(|e| InvalidRecord::new(Self::KIND, e))
    }

    /// Serialize to a JSON value.
    fn to_value(&self) -> Result<serde_json::Value, InvalidRecord> {
        serde_json::to_value(self).map_err(|e| InvalidRecord::new(Self::KIND, e))
    }
}

/// Declares the closed set of wire strings for a schema enumeration and
/// derives `as_str`, `ALL`, `Display` and `FromStr` from it.
macro_rules! schema_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value as written on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::InvalidRecord;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    _ => Err($crate::domain::InvalidRecord::new(
                        stringify!($name),
                        format!("unknown variant `{}`", s),
                    )),
                }
            }
        }
    };
}

pub(crate) use schema_enum;
