//! Metro records: stations, lines and line branches.
//!
//! Metro systems run to a frequency rather than a fixed timetable, so a
//! branch carries service periods (a headway between two times) instead of
//! individual departures.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::record::schema_enum;
use super::{Airport, ClockTime, Record, Station, TrainStation};

/// Kind of metro system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetroType {
    /// Underground heavy metro, e.g. the MTR or Singapore's MRT.
    #[default]
    Subway,
    LightRail,
    /// Street-running trams, e.g. Hong Kong or Melbourne.
    Tram,
    Maglev,
    /// Fewer stops on separate tracks, e.g. Airport Express.
    Express,
    /// e.g. San Francisco cable cars, Ngong Ping 360.
    CableCar,
}

schema_enum!(MetroType {
    Subway => "subway",
    LightRail => "light_rail",
    Tram => "tram",
    Maglev => "maglev",
    Express => "express",
    CableCar => "cable_car",
});

/// A metro station.
///
/// `connect_airport` and `connect_train` record an interchange with an
/// airport or a railway station, as on an airport express line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroStation {
    pub code: String,
    /// Native name, e.g. "中環".
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    pub id: String,
    pub station: Station,
    #[serde(default)]
    pub metro_type: MetroType,
    /// Served by more than one line.
    #[serde(default)]
    pub transfer: bool,
    #[serde(default)]
    pub connect_airport: Option<Arc<Airport>>,
    #[serde(default)]
    pub connect_train: Option<Arc<TrainStation>>,
}

impl MetroStation {
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
            metro_type: MetroType::default(),
            transfer: false,
            connect_airport: None,
            connect_train: None,
        }
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn with_metro_type(mut self, metro_type: MetroType) -> Self {
        self.metro_type = metro_type;
        self
    }

    pub fn with_transfer(mut self, transfer: bool) -> Self {
        self.transfer = transfer;
        self
    }

    pub fn with_connect_airport(mut self, airport: impl Into<Arc<Airport>>) -> Self {
        self.connect_airport = Some(airport.into());
        self
    }

    pub fn with_connect_train(mut self, station: impl Into<Arc<TrainStation>>) -> Self {
        self.connect_train = Some(station.into());
        self
    }
}

impl Record for MetroStation {
    const KIND: &'static str = "MetroStation";
}

/// A metro line.
///
/// A Y-shaped line has one branch per path; each branch lists its full
/// run of stations even where branches overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroLine {
    /// Official native name, e.g. "港島綫" or "1 号线".
    pub name: String,
    #[serde(default)]
    pub name_en: Option<String>,
    /// Colloquial name, e.g. "Blue Line".
    #[serde(default)]
    pub alias: Option<String>,
    pub id: String,
    /// e.g. "#FF0000"
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub metro_type: MetroType,
    #[serde(default)]
    pub branches: Vec<MetroLineBranch>,
}

impl MetroLine {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            name_en: None,
            alias: None,
            id: id.into(),
            color: None,
            metro_type: MetroType::default(),
            branches: Vec::new(),
        }
    }

    pub fn with_name_en(mut self, name_en: impl Into<String>) -> Self {
        self.name_en = Some(name_en.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_metro_type(mut self, metro_type: MetroType) -> Self {
        self.metro_type = metro_type;
        self
    }

    pub fn with_branches(mut self, branches: impl IntoIterator<Item = MetroLineBranch>) -> Self {
        self.branches = branches.into_iter().collect();
        self
    }
}

impl Record for MetroLine {
    const KIND: &'static str = "MetroLine";
}

/// A window of the day during which trains run between two stations at a
/// fixed headway.
///
/// Written on the wire as `[start_station, end_station, start_time,
/// end_time, frequency]`. The endpoints should be stations of the owning
/// branch; nothing here checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PeriodTuple", into = "PeriodTuple")]
pub struct ServicePeriod {
    pub start_station: Arc<MetroStation>,
    pub end_station: Arc<MetroStation>,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    /// Minutes between trains.
    pub frequency: f64,
}

type PeriodTuple = (
    Arc<MetroStation>,
    Arc<MetroStation>,
    ClockTime,
    ClockTime,
    f64,
);

impl ServicePeriod {
    pub fn new(
        start_station: impl Into<Arc<MetroStation>>,
        end_station: impl Into<Arc<MetroStation>>,
        start_time: ClockTime,
        end_time: ClockTime,
        frequency: f64,
    ) -> Self {
        Self {
            start_station: start_station.into(),
            end_station: end_station.into(),
            start_time,
            end_time,
            frequency,
        }
    }
}

impl From<PeriodTuple> for ServicePeriod {
    fn from(
        (start_station, end_station, start_time, end_time, frequency): PeriodTuple,
    ) -> Self {
        Self {
            start_station,
            end_station,
            start_time,
            end_time,
            frequency,
        }
    }
}

impl From<ServicePeriod> for PeriodTuple {
    fn from(period: ServicePeriod) -> Self {
        (
            period.start_station,
            period.end_station,
            period.start_time,
            period.end_time,
            period.frequency,
        )
    }
}

/// One path of a metro line.
///
/// `line` refers back to the owning line without owning it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetroLineBranch {
    pub line: Arc<MetroLine>,
    /// e.g. "Branch A"
    pub branch_name: String,
    pub stations: Vec<Arc<MetroStation>>,
    #[serde(default)]
    pub periods: Vec<ServicePeriod>,
}

impl MetroLineBranch {
    pub fn new(
        line: impl Into<Arc<MetroLine>>,
        branch_name: impl Into<String>,
        stations: impl IntoIterator<Item = Arc<MetroStation>>,
    ) -> Self {
        Self {
            line: line.into(),
            branch_name: branch_name.into(),
            stations: stations.into_iter().collect(),
            periods: Vec::new(),
        }
    }

    pub fn with_periods(mut self, periods: impl IntoIterator<Item = ServicePeriod>) -> Self {
        self.periods = periods.into_iter().collect();
        self
    }
}

impl Record for MetroLineBranch {
    const KIND: &'static str = "MetroLineBranch";
}
