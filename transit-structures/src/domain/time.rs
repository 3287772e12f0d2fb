//! Time-of-day handling for timetable fields.
//!
//! Flights, trains and metro service periods carry local clock times without
//! a date. On the wire these are ISO 8601 local times: `HH:MM`, `HH:MM:SS`
//! or `HH:MM:SS.ffffff`.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A local time of day, as printed in a timetable.
///
/// # Examples
///
/// ```
/// use transit_structures::domain::ClockTime;
///
/// let t = ClockTime::parse("14:30").unwrap();
/// assert_eq!(t.hour(), 14);
/// assert_eq!(t.to_string(), "14:30");
///
/// let t = ClockTime::parse("23:05:30").unwrap();
/// assert_eq!(t.second(), 30);
///
/// assert!(ClockTime::parse("25:00").is_err());
/// assert!(ClockTime::parse("1430").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Build a time from hour, minute and second, or `None` if out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse `HH:MM`, `HH:MM:SS` or `HH:MM:SS.fraction`.
    ///
    /// The fraction holds 1 to 9 digits. Hours must be 0-23, minutes and
    /// seconds 0-59.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let (hh, mm, rest) = match s.as_bytes() {
            [h1, h2, b':', m1, m2, rest @ ..] => ([*h1, *h2], [*m1, *m2], rest),
            _ => return Err(TimeError::new("expected HH:MM format")),
        };

        let hour = clock_field(hh, 23, "invalid hour digits", "hour must be 0-23")?;
        let minute = clock_field(mm, 59, "invalid minute digits", "minute must be 0-59")?;

        let (second, nano) = match rest {
            [] => (0, 0),
            [b':', s1, s2, fraction @ ..] => (
                clock_field(
                    [*s1, *s2],
                    59,
                    "invalid second digits",
                    "second must be 0-59",
                )?,
                parse_fraction(fraction)?,
            ),
            _ => return Err(TimeError::new("expected HH:MM:SS format")),
        };

        NaiveTime::from_hms_nano_opt(hour, minute, second, nano)
            .map(Self)
            .ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the underlying chrono time.
    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    /// The ISO 8601 form used for interchange.
    ///
    /// Always includes seconds; the fraction only when non-zero.
    pub fn to_iso(&self) -> String {
        if self.0.nanosecond() == 0 {
            self.0.format("%H:%M:%S").to_string()
        } else {
            self.0.format("%H:%M:%S%.f").to_string()
        }
    }
}

/// Leap seconds are folded into the last nanosecond of the preceding
/// second, since `HH:MM:60` is not a valid timetable time.
impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        let nano = time.nanosecond().min(999_999_999);
        Self(time.with_nanosecond(nano).unwrap_or(time))
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({})", self.to_iso())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.second() == 0 && self.0.nanosecond() == 0 {
            write!(f, "{:02}:{:02}", self.hour(), self.minute())
        } else {
            write!(
                f,
                "{:02}:{:02}:{:02}",
                self.hour(),
                self.minute(),
                self.second()
            )
        }
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A two-digit clock component no greater than `max`.
fn clock_field(
    digits: [u8; 2],
    max: u32,
    not_digits: &'static str,
    out_of_range: &'static str,
) -> Result<u32, TimeError> {
    let value = match digits {
        [tens @ b'0'..=b'9', units @ b'0'..=b'9'] => {
            u32::from(tens - b'0') * 10 + u32::from(units - b'0')
        }
        _ => return Err(TimeError::new(not_digits)),
    };
    if value > max {
        return Err(TimeError::new(out_of_range));
    }
    Ok(value)
}

/// Parse an optional `.digits` suffix into nanoseconds.
fn parse_fraction(bytes: &[u8]) -> Result<u32, TimeError> {
    if bytes.is_empty() {
        return Ok(0);
    }
    if bytes[0] != b'.' {
        return Err(TimeError::new("unexpected trailing characters"));
    }

    let digits = &bytes[1..];
    if digits.is_empty() || digits.len() > 9 {
        return Err(TimeError::new("fraction must have 1-9 digits"));
    }

    let mut nano = 0u32;
    for &b in digits {
        let d = (b as char)
            .to_digit(10)
            .ok_or_else(|| TimeError::new("invalid fraction digits"))?;
        nano = nano * 10 + d;
    }
    for _ in digits.len()..9 {
        nano *= 10;
    }
    Ok(nano)
}
