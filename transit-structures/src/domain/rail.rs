//! Rail records: train stations, carriers and trains.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::record::schema_enum;
use super::{ClockTime, Record, Station};

/// A railway station.
///
/// `name` is the native name ("東京", "香港西九龍"); `name_en` the English
/// one where it differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainStation {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub id: String,
    pub station: Station,
}

impl TrainStation {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
        station: Station,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            name_en: None,
            id: id.into(),
            station,
        }
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }
}

impl Record for TrainStation {
    const KIND: &'static str = "TrainStation";
}

/// Class of train service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainType {
    /// Shinkansen, TGV and the like.
    HighSpeed,
    /// Intercity and other regional services.
    #[default]
    Regional,
    /// Suburban services.
    Commuter,
}

schema_enum!(TrainType {
    HighSpeed => "high_speed",
    Regional => "regional",
    Commuter => "commuter",
});

/// A company operating trains.
///
/// `parent` names the group a subsidiary belongs to; chains should be
/// acyclic but are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainCarrier {
    pub name: String,
    pub country: String,
    /// Short form, e.g. "AMT" for Amtrak.
    #[serde(default)]
    pub abbr: Option<String>,
    #[serde(default)]
    pub parent: Option<Arc<TrainCarrier>>,
}

impl TrainCarrier {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            abbr: None,
            parent: None,
        }
    }

    pub fn with_abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<Arc<TrainCarrier>>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

impl Record for TrainCarrier {
    const KIND: &'static str = "TrainCarrier";
}

/// An intermediate call of a train, with its arrival time.
///
/// Written on the wire as a `[station, time]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "(Arc<TrainStation>, ClockTime)",
    into = "(Arc<TrainStation>, ClockTime)"
)]
pub struct TrainStop {
    pub station: Arc<TrainStation>,
    pub arrival: ClockTime,
}

impl TrainStop {
    pub fn new(station: impl Into<Arc<TrainStation>>, arrival: ClockTime) -> Self {
        Self {
            station: station.into(),
            arrival,
        }
    }
}

impl From<(Arc<TrainStation>, ClockTime)> for TrainStop {
    fn from((station, arrival): (Arc<TrainStation>, ClockTime)) -> Self {
        Self { station, arrival }
    }
}

impl From<TrainStop> for (Arc<TrainStation>, ClockTime) {
    fn from(stop: TrainStop) -> Self {
        (stop.station, stop.arrival)
    }
}

/// A scheduled train.
///
/// `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// e.g. "TGV1234"
    pub train_number: String,
    pub carrier: Arc<TrainCarrier>,
    pub region: String,
    pub departure_station: Arc<TrainStation>,
    pub arrival_station: Arc<TrainStation>,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub duration: i64,
    #[serde(default)]
    pub stops: Vec<TrainStop>,
    #[serde(default)]
    pub train_type: TrainType,
}

impl Train {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        train_number: impl Into<String>,
        carrier: impl Into<Arc<TrainCarrier>>,
        region: impl Into<String>,
        departure_station: impl Into<Arc<TrainStation>>,
        arrival_station: impl Into<Arc<TrainStation>>,
        departure_time: ClockTime,
        arrival_time: ClockTime,
        duration: i64,
    ) -> Self {
        Self {
            train_number: train_number.into(),
            carrier: carrier.into(),
            region: region.into(),
            departure_station: departure_station.into(),
            arrival_station: arrival_station.into(),
            departure_time,
            arrival_time,
            duration,
            stops: Vec::new(),
            train_type: TrainType::default(),
        }
    }

    pub fn with_stops(mut self, stops: impl IntoIterator<Item = TrainStop>) -> Self {
        self.stops = stops.into_iter().collect();
        self
    }

    pub fn with_train_type(mut self, train_type: TrainType) -> Self {
        self.train_type = train_type;
        self
    }
}

impl Record for Train {
    const KIND: &'static str = "Train";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use serde_json::json;

    #[test]
    fn train_station_from_json() {
        let station = TrainStation::from_value(fixtures::west_kowloon()).unwrap();
        assert_eq!(station.code, "XJA");
        assert_eq!(station.name, "香港西九龍");
        assert_eq!(station.name_en.as_deref(), Some("Hong Kong West Kowloon"));
    }

    #[test]
    fn train_station_name_en_optional() {
        let station = TrainStation::from_value(fixtures::shenzhen_north()).unwrap();
        assert!(station.name_en.is_none());
    }

    #[test]
    fn train_station_required_fields() {
        for field in ["code", "name", "id", "station"] {
            let mut value = fixtures::west_kowloon();
            value.as_object_mut().unwrap().remove(field);
            let err = TrainStation::from_value(value).unwrap_err();
            assert!(err.reason().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn train_station_json_roundtrip() {
        let station = TrainStation::from_value(fixtures::west_kowloon()).unwrap();
        let json = station.to_json().unwrap();
        assert_eq!(TrainStation::from_json(&json).unwrap(), station);
    }

    #[test]
    fn carrier_parent_chain() {
        let json = json!({
            "name": "MTR Corporation",
            "country": "Hong Kong",
            "parent": {
                "name": "Hong Kong Government",
                "country": "Hong Kong",
                "parent": null
            }
        });
        let carrier = TrainCarrier::from_value(json).unwrap();
        assert!(carrier.abbr.is_none());
        let parent = carrier.parent.as_ref().unwrap();
        assert_eq!(parent.name, "Hong Kong Government");
        assert!(parent.parent.is_none());
    }

    #[test]
    fn carrier_required_fields() {
        for field in ["name", "country"] {
            let mut value = fixtures::china_railway();
            value.as_object_mut().unwrap().remove(field);
            let err = TrainCarrier::from_value(value).unwrap_err();
            assert!(err.reason().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn carrier_builder() {
        let amtrak = TrainCarrier::new("Amtrak", "United States").with_abbr("AMT");
        let json = amtrak.to_json().unwrap();
        assert_eq!(TrainCarrier::from_json(&json).unwrap(), amtrak);
    }

    #[test]
    fn train_from_json_defaults() {
        let train = Train::from_value(fixtures::g_train()).unwrap();
        assert_eq!(train.train_number, "G6538");
        assert_eq!(train.carrier.abbr.as_deref(), Some("CR"));
        assert_eq!(train.departure_station.code, "XJA");
        assert_eq!(train.arrival_station.code, "IOQ");
        assert_eq!(train.duration, 21);
        assert!(train.stops.is_empty());
        assert_eq!(train.train_type, TrainType::Regional);
    }

    #[test]
    fn train_stops_are_pairs() {
        let mut value = fixtures::g_train();
        value["stops"] = json!([[fixtures::futian(), "08:44"]]);
        value["train_type"] = json!("high_speed");

        let train = Train::from_value(value).unwrap();
        assert_eq!(train.train_type, TrainType::HighSpeed);
        assert_eq!(train.stops.len(), 1);
        assert_eq!(train.stops[0].station.code, "IZQ");
        assert_eq!(train.stops[0].arrival, ClockTime::from_hms(8, 44, 0).unwrap());

        let written = train.to_value().unwrap();
        assert!(written["stops"][0].is_array());
        assert_eq!(written["stops"][0][1], "08:44:00");
    }

    #[test]
    fn train_rejects_malformed_stop() {
        let mut value = fixtures::g_train();
        value["stops"] = json!([[fixtures::futian()]]);
        assert!(Train::from_value(value).is_err());

        let mut value = fixtures::g_train();
        value["stops"] = json!([{"station": fixtures::futian(), "arrival": "08:44"}]);
        assert!(Train::from_value(value).is_err());
    }

    #[test]
    fn train_rejects_unknown_type() {
        let mut value = fixtures::g_train();
        value["train_type"] = json!("bullet");
        let err = Train::from_value(value).unwrap_err();
        assert_eq!(err.kind(), "Train");
        assert!(err.reason().contains("bullet"));
    }

    #[test]
    fn train_required_fields() {
        for field in [
            "train_number",
            "carrier",
            "region",
            "departure_station",
            "arrival_station",
            "departure_time",
            "arrival_time",
            "duration",
        ] {
            let mut value = fixtures::g_train();
            value.as_object_mut().unwrap().remove(field);
            let err = Train::from_value(value).unwrap_err();
            assert!(err.reason().contains(field), "{field}: {err}");
        }
    }

    #[test]
    fn train_builder_roundtrip() {
        let parsed = Train::from_value(fixtures::g_train()).unwrap();
        let futian = TrainStation::from_value(fixtures::futian()).unwrap();
        let train = Train::new(
            "G6540",
            parsed.carrier.clone(),
            "Guangdong",
            parsed.departure_station.clone(),
            parsed.arrival_station.clone(),
            ClockTime::parse("09:00").unwrap(),
            ClockTime::parse("09:21").unwrap(),
            21,
        )
        .with_stops([TrainStop::new(futian, ClockTime::parse("09:14").unwrap())])
        .with_train_type(TrainType::HighSpeed);

        let json = train.to_json().unwrap();
        assert_eq!(Train::from_json(&json).unwrap(), train);
    }

    #[test]
    fn train_type_strings() {
        assert_eq!(TrainType::default(), TrainType::Regional);
        assert_eq!(TrainType::HighSpeed.to_string(), "high_speed");
        for ty in TrainType::ALL {
            assert_eq!(ty.as_str().parse::<TrainType>().unwrap(), *ty);
            assert_eq!(serde_json::to_value(ty).unwrap(), ty.as_str());
        }
        assert!("highspeed".parse::<TrainType>().is_err());
    }
}
