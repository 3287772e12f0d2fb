//! Air travel records: airports, airlines, alliances and flights.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::record::schema_enum;
use super::{ClockTime, Record, Station};

/// Scale of service an airport offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportType {
    International,
    Domestic,
    Regional,
}

schema_enum!(AirportType {
    International => "international",
    Domestic => "domestic",
    Regional => "regional",
});

/// An airport.
///
/// `code` is the IATA airport code. It should be unique within a dataset,
/// which is left to whoever assembles the data.
///
/// # Examples
///
/// ```
/// use transit_structures::domain::{Airport, AirportType, Station, StationType};
///
/// let station = Station::new("Newark", StationType::Airport, 40.69, -74.17, "Newark", "United States");
/// let ewr = Airport::new("EWR", AirportType::International, "Newark Liberty International Airport", "NYC", "ewr", station);
/// assert!(!ewr.mixed_use);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub code: String,
    pub airport_type: AirportType,
    /// Shared civilian and military operations.
    #[serde(default)]
    pub mixed_use: bool,
    /// English name, e.g. "John F. Kennedy International Airport".
    pub name: String,
    /// IATA metropolitan code the airport is filed under, e.g. "NYC" for EWR.
    pub operating_city: String,
    pub id: String,
    pub station: Station,
}

impl Airport {
    pub fn new(
        code: impl Into<String>,
        airport_type: AirportType,
        name: impl Into<String>,
        operating_city: impl Into<String>,
        id: impl Into<String>,
        station: Station,
    ) -> Self {
        Self {
            code: code.into(),
            airport_type,
            mixed_use: false,
            name: name.into(),
            operating_city: operating_city.into(),
            id: id.into(),
            station,
        }
    }

    pub fn with_mixed_use(mut self, mixed_use: bool) -> Self {
        self.mixed_use = mixed_use;
        self
    }
}

impl Record for Airport {
    const KIND: &'static str = "Airport";
}

/// A commercial grouping of airlines, e.g. "Star Alliance".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alliance {
    pub name: String,
    pub id: String,
    /// One of the three global alliances rather than a regional one.
    #[serde(default)]
    pub worldwide: bool,
    #[serde(default)]
    pub website: Option<String>,
}

impl Alliance {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            worldwide: false,
            website: None,
        }
    }

    pub fn with_worldwide(mut self, worldwide: bool) -> Self {
        self.worldwide = worldwide;
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

impl Record for Alliance {
    const KIND: &'static str = "Alliance";
}

/// An airline.
///
/// `parent_airline` points at the group a subsidiary belongs to (Scoot
/// under Singapore Airlines, HK Express under Cathay Pacific). The chain
/// should be acyclic; nothing here checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airline {
    pub name: String,
    /// IATA airline code, e.g. "SQ".
    pub code: String,
    pub id: String,
    pub country: String,
    #[serde(default)]
    pub hub_airports: Vec<Arc<Airport>>,
    /// Low-cost carrier.
    #[serde(default)]
    pub lcc: bool,
    #[serde(default)]
    pub parent_airline: Option<Arc<Airline>>,
    #[serde(default)]
    pub alliance: Option<Arc<Alliance>>,
    #[serde(default)]
    pub website: Option<String>,
}

impl Airline {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        id: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            id: id.into(),
            country: country.into(),
            hub_airports: Vec::new(),
            lcc: false,
            parent_airline: None,
            alliance: None,
            website: None,
        }
    }

    pub fn with_hub_airports(mut self, hubs: impl IntoIterator<Item = Arc<Airport>>) -> Self {
        self.hub_airports = hubs.into_iter().collect();
        self
    }

    pub fn with_lcc(mut self, lcc: bool) -> Self {
        self.lcc = lcc;
        self
    }

    pub fn with_parent_airline(mut self, parent: impl Into<Arc<Airline>>) -> Self {
        self.parent_airline = Some(parent.into());
        self
    }

    pub fn with_alliance(mut self, alliance: impl Into<Arc<Alliance>>) -> Self {
        self.alliance = Some(alliance.into());
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

impl Record for Airline {
    const KIND: &'static str = "Airline";
}

/// A scheduled flight.
///
/// Times are estimated local times; `duration` is in minutes. When the
/// flight is a codeshare, `codeshared` refers to the other flight number
/// under which it is sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub airline: Arc<Airline>,
    pub departure_airport: Arc<Airport>,
    pub arrival_airport: Arc<Airport>,
    pub departure_time: ClockTime,
    pub arrival_time: ClockTime,
    pub duration: i64,
    /// Intermediate stopovers, in order.
    #[serde(default)]
    pub stops: Vec<Arc<Airport>>,
    /// Crosses a national border.
    #[serde(default)]
    pub international: bool,
    #[serde(default)]
    pub codeshared: Option<Arc<Flight>>,
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        airline: impl Into<Arc<Airline>>,
        departure_airport: impl Into<Arc<Airport>>,
        arrival_airport: impl Into<Arc<Airport>>,
        departure_time: ClockTime,
        arrival_time: ClockTime,
        duration: i64,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            airline: airline.into(),
            departure_airport: departure_airport.into(),
            arrival_airport: arrival_airport.into(),
            departure_time,
            arrival_time,
            duration,
            stops: Vec::new(),
            international: false,
            codeshared: None,
        }
    }

    pub fn with_stops(mut self, stops: impl IntoIterator<Item = Arc<Airport>>) -> Self {
        self.stops = stops.into_iter().collect();
        self
    }

    pub fn with_international(mut self, international: bool) -> Self {
        self.international = international;
        self
    }

    pub fn with_codeshared(mut self, flight: impl Into<Arc<Flight>>) -> Self {
        self.codeshared = Some(flight.into());
        self
    }
}

impl Record for Flight {
    const KIND: &'static str = "Flight";
}
