//! Booking conflict detection -- decides whether a proposed interval can be
//! submitted.
//!
//! Touching intervals (one ends exactly when the other starts) are never
//! conflicts, so back-to-back bookings are always allowed.

use chrono::NaiveDate;
use thiserror::Error;

use crate::clock::TimeSpan;
use crate::model::{BlockingRule, Campus, Reservation};
use crate::recurrence::active_rules;

/// Why a proposed interval cannot be booked.
///
/// Carries a clone of the row that rejected it so callers can show which
/// booking or rule was in the way. Implements `std::error::Error` with the
/// message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Conflict {
    /// The interval overlaps a reservation that is pending or approved.
    #[error("this time range already has a reservation or one awaiting approval")]
    Reservation(Reservation),

    /// The interval overlaps a blocking rule active on the date.
    #[error("this time range is unavailable: {}", .0.reason)]
    Rule(BlockingRule),
}

/// Check a proposed `[start, end)` interval against everything already on
/// the calendar for `date` at `campus`.
///
/// Reservations are checked first (only pending and approved block; rejected
/// and cancelled rows never do), then blocking rules active on the date.
/// `None` means the interval is clear to submit. Both the pre-submit form
/// check and the final submission check call this one function, so the two
/// can never disagree.
///
/// This is still a check against one snapshot: two clients submitting at the
/// same moment can both see `None`, so the persistence layer must hold the
/// authoritative uniqueness guard.
pub fn check_conflict(
    candidate: TimeSpan,
    date: NaiveDate,
    campus: Campus,
    reservations: &[Reservation],
    rules: &[BlockingRule],
) -> Option<Conflict> {
    let reservation_hit = reservations.iter().find(|res| {
        res.occupies(date, campus) && res.status.blocks() && res.span().overlaps(candidate)
    });
    if let Some(res) = reservation_hit {
        return Some(Conflict::Reservation(res.clone()));
    }

    active_rules(rules, date, campus)
        .find(|rule| rule.span().overlaps(candidate))
        .map(|rule| Conflict::Rule(rule.clone()))
}
