//! Domain entities -- reservations, recurring blocking rules, and the
//! snapshot one engine invocation computes over.
//!
//! Field names and enum wire values match the rows the booking frontend
//! stores (camelCase keys, lowercase statuses), so a raw table export
//! deserializes directly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{TimeOfDay, TimeSpan};
use crate::error::{EngineError, Result};

/// The two bookable sites. Reservations and rules on one campus never
/// interact with the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Campus {
    Incheon,
    Gyeonggi,
}

impl fmt::Display for Campus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Campus::Incheon => "incheon",
            Campus::Gyeonggi => "gyeonggi",
        })
    }
}

impl FromStr for Campus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "incheon" => Ok(Campus::Incheon),
            "gyeonggi" => Ok(Campus::Gyeonggi),
            other => Err(EngineError::UnknownCampus(other.to_string())),
        }
    }
}

/// Reservation lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl ReservationStatus {
    /// Display priority when several reservations overlap the same slot:
    /// approved outranks pending outranks rejected. Cancelled is 0 and is
    /// never selected.
    pub fn priority(self) -> u8 {
        match self {
            ReservationStatus::Approved => 3,
            ReservationStatus::Pending => 2,
            ReservationStatus::Rejected => 1,
            ReservationStatus::Cancelled => 0,
        }
    }

    /// True for the statuses that block new bookings. Rejected and cancelled
    /// rows stay in storage but never conflict with anything.
    pub fn blocks(self) -> bool {
        matches!(self, ReservationStatus::Pending | ReservationStatus::Approved)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Approved => "approved",
            ReservationStatus::Rejected => "rejected",
            ReservationStatus::Cancelled => "cancelled",
        })
    }
}

/// A submitted room reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Storage-assigned identifier, opaque to the engine.
    pub id: String,
    pub campus: Campus,
    pub use_date: NaiveDate,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: ReservationStatus,
    #[serde(rename = "userId")]
    pub owner_id: String,
    pub team_name: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}

impl Reservation {
    /// The reserved `[start, end)` interval.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time.minutes(), self.end_time.minutes())
    }

    /// True when this row sits on `date` at `campus`, regardless of status.
    pub fn occupies(&self, date: NaiveDate, campus: Campus) -> bool {
        self.use_date == date && self.campus == campus
    }
}

/// How often a blocking rule recurs inside its validity window.
///
/// Flattens into the rule row under the `frequencyType` tag, exactly as the
/// admin screen stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frequencyType", rename_all = "snake_case")]
pub enum Frequency {
    /// Blocks every date inside the validity window.
    Once,
    /// Blocks one weekday per week. `day_of_week`: 0 = Sunday .. 6 = Saturday.
    Weekly {
        #[serde(rename = "dayOfWeek")]
        day_of_week: u8,
    },
    /// Blocks the nth occurrence of a weekday per month, where weeks are
    /// counted from the month's first Sunday (see `recurrence`).
    /// `week_of_month` ranges 1..=5; a literal 5 may never match in months
    /// without a fifth occurrence.
    #[serde(rename = "monthly_by_week_day")]
    MonthlyByWeekday {
        #[serde(rename = "weekOfMonth")]
        week_of_month: u8,
        #[serde(rename = "dayOfWeek")]
        day_of_week: u8,
    },
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn weekday_name(day_of_week: u8) -> &'static str {
    WEEKDAY_NAMES
        .get(day_of_week as usize)
        .copied()
        .unwrap_or("invalid weekday")
}

fn ordinal(n: u8) -> String {
    let suffix = match n % 10 {
        1 if n % 100 != 11 => "st",
        2 if n % 100 != 12 => "nd",
        3 if n % 100 != 13 => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl fmt::Display for Frequency {
    /// Human label used by detail views: `one-off`, `every Wednesday`,
    /// `monthly on the 2nd Wednesday`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Once => f.write_str("one-off"),
            Frequency::Weekly { day_of_week } => {
                write!(f, "every {}", weekday_name(*day_of_week))
            }
            Frequency::MonthlyByWeekday {
                week_of_month,
                day_of_week,
            } => write!(
                f,
                "monthly on the {} {}",
                ordinal(*week_of_month),
                weekday_name(*day_of_week)
            ),
        }
    }
}

/// An admin-managed recurring block on a campus.
///
/// Rules are valid on `[start_date, end_date]` (inclusive on both ends) and
/// block the `[start_time, end_time)` window on every date their frequency
/// matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockingRule {
    pub id: String,
    pub campus: Campus,
    /// Shown to users when the rule rejects a booking.
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub frequency: Frequency,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl BlockingRule {
    /// The blocked `[start, end)` window.
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time.minutes(), self.end_time.minutes())
    }
}

/// A point-in-time export of both booking tables.
///
/// Reservations and rules are always fetched together so one resolution pass
/// never mixes lists from two different moments. The engine treats the
/// snapshot as immutable; refreshing means building a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub rules: Vec<BlockingRule>,
}

impl Snapshot {
    /// Parse a snapshot JSON document.
    ///
    /// # Errors
    /// Returns `EngineError::SnapshotParse` when the document is not valid
    /// JSON or a row has a malformed field.
    pub fn from_json(json: &str) -> Result<Snapshot> {
        Ok(serde_json::from_str(json)?)
    }
}
