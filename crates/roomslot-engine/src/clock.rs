//! Wall-clock time arithmetic -- minute offsets, `HH:MM` parsing, and
//! half-open interval overlap.
//!
//! Every availability decision in the engine reduces to integer comparisons
//! on minutes-from-midnight. No floating point is used anywhere.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, Result};

/// Minutes from midnight. A day spans `0..=1440` (1440 is the exclusive end
/// boundary of the last slot, rendered as `00:00`).
pub type Minutes = u16;

/// Parse an `HH:MM` string into minutes from midnight.
///
/// Accepts two colon-separated non-negative integers with hour in `0..=23`
/// and minute in `0..=59`. Zero-padding is optional (`"9:30"` parses).
///
/// # Examples
///
/// ```
/// use roomslot_engine::to_minutes;
///
/// assert_eq!(to_minutes("09:30").unwrap(), 570);
/// assert_eq!(to_minutes("23:59").unwrap(), 1439);
/// assert!(to_minutes("24:00").is_err());
/// assert!(to_minutes("0930").is_err());
/// ```
///
/// # Errors
/// Returns `EngineError::InvalidTime` for anything else, including `24:00`.
pub fn to_minutes(time: &str) -> Result<Minutes> {
    let invalid = || EngineError::InvalidTime(time.to_string());
    let (h, m) = time.split_once(':').ok_or_else(invalid)?;
    let hour: Minutes = h.parse().map_err(|_| invalid())?;
    let minute: Minutes = m.parse().map_err(|_| invalid())?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok(hour * 60 + minute)
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// # Errors
/// Returns `EngineError::InvalidDate` if the string is malformed or names a
/// day that does not exist (e.g. `2024-02-30`).
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(date.to_string()))
}

/// A wall-clock time of day at minute granularity.
///
/// Ordered newtype over [`Minutes`]; serializes as its `HH:MM` string so
/// reservation rows keep the wire shape the booking frontend stores
/// (`"startTime": "09:00"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Minutes);

impl TimeOfDay {
    /// Minutes from midnight, always in `0..=1439`.
    pub fn minutes(self) -> Minutes {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        to_minutes(s).map(TimeOfDay)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A half-open interval `[start, end)` in minutes from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeSpan {
    /// Build a span. Callers guarantee `start < end`; entity constructors and
    /// the slot grid never produce empty or inverted spans.
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "TimeSpan requires start < end");
        TimeSpan { start, end }
    }

    /// True iff the two half-open intervals share at least one minute.
    ///
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    /// Touching endpoints (one ends exactly when the other starts) never
    /// overlap, so back-to-back bookings are always allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// use roomslot_engine::TimeSpan;
    ///
    /// let morning = TimeSpan::new(540, 600); // 09:00-10:00
    /// assert!(morning.overlaps(TimeSpan::new(570, 630)));
    /// assert!(!morning.overlaps(TimeSpan::new(600, 660))); // adjacent
    /// ```
    pub fn overlaps(self, other: TimeSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration_minutes(self) -> Minutes {
        self.end - self.start
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 60,
            self.start % 60,
            (self.end / 60) % 24,
            self.end % 60
        )
    }
}
