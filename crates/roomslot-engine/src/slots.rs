//! Day-grid aggregation -- the 32-slot availability strip the calendar
//! renders for one campus and date.
//!
//! The bookable day runs 08:00 to midnight in 30-minute slots. Each slot is a
//! real half-open interval; only the final boundary label wraps to `00:00`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{Minutes, TimeSpan};
use crate::model::{BlockingRule, Campus, Reservation, ReservationStatus};
use crate::recurrence::active_rules;

/// Length of one bookable slot.
pub const SLOT_MINUTES: Minutes = 30;
/// First slot boundary of the day, 08:00.
pub const DAY_START_MINUTE: Minutes = 8 * 60;
/// Slots per day: 08:00 to midnight in 30-minute steps.
pub const SLOTS_PER_DAY: usize = 32;

/// Occupancy state of one slot. Wire values are the state strings the
/// frontend styles by (`"in-progress"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotStatus {
    /// Nothing blocking touches the slot; it can be booked.
    Available,
    /// Overlapped by a reservation awaiting review.
    Pending,
    /// Overlapped by an approved reservation.
    InProgress,
    /// Overlapped by an active blocking rule.
    Unavailable,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotStatus::Available => "available",
            SlotStatus::Pending => "pending",
            SlotStatus::InProgress => "in-progress",
            SlotStatus::Unavailable => "unavailable",
        })
    }
}

/// The half-open interval covered by slot `index` (`0..SLOTS_PER_DAY`).
///
/// Slot 0 is `[08:00, 08:30)`; slot 31 is `[23:30, 24:00)`, whose end is
/// minute 1440 for overlap arithmetic even though it renders as `00:00`.
pub fn slot_span(index: usize) -> TimeSpan {
    debug_assert!(index < SLOTS_PER_DAY, "slot index out of range: {index}");
    let start = DAY_START_MINUTE + SLOT_MINUTES * index as Minutes;
    TimeSpan::new(start, start + SLOT_MINUTES)
}

/// Label of slot boundary `boundary` (`0..=SLOTS_PER_DAY`), wrapping past
/// midnight: boundary 0 is `"08:00"`, boundary 32 is `"00:00"`.
pub fn slot_label(boundary: usize) -> String {
    debug_assert!(boundary <= SLOTS_PER_DAY, "boundary out of range: {boundary}");
    let minutes = (DAY_START_MINUTE + SLOT_MINUTES * boundary as Minutes) % (24 * 60);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Compute the day grid: the status of all 32 slots for `date` at `campus`.
///
/// Per slot, first match wins:
/// 1. an overlapping approved reservation makes it [`SlotStatus::InProgress`];
/// 2. otherwise an overlapping active rule makes it [`SlotStatus::Unavailable`];
/// 3. otherwise an overlapping pending reservation makes it [`SlotStatus::Pending`];
/// 4. otherwise it stays [`SlotStatus::Available`].
///
/// Rejected and cancelled reservations never raise a slot above available.
/// Pure function of its inputs; rules and reservations are prefiltered to the
/// day once, so a call costs O(reservations + rules) plus the fixed 32-slot
/// walk.
pub fn day_slots(
    date: NaiveDate,
    campus: Campus,
    reservations: &[Reservation],
    rules: &[BlockingRule],
) -> [SlotStatus; SLOTS_PER_DAY] {
    let day_rules: Vec<&BlockingRule> = active_rules(rules, date, campus).collect();
    let day_reservations: Vec<&Reservation> = reservations
        .iter()
        .filter(|res| res.occupies(date, campus))
        .collect();

    let mut grid = [SlotStatus::Available; SLOTS_PER_DAY];
    for (index, slot) in grid.iter_mut().enumerate() {
        *slot = slot_status(slot_span(index), &day_rules, &day_reservations);
    }
    grid
}

fn slot_status(
    slot: TimeSpan,
    day_rules: &[&BlockingRule],
    day_reservations: &[&Reservation],
) -> SlotStatus {
    let mut has_pending = false;
    for res in day_reservations {
        if res.span().overlaps(slot) {
            match res.status {
                // Approved outranks everything, including rules.
                ReservationStatus::Approved => return SlotStatus::InProgress,
                ReservationStatus::Pending => has_pending = true,
                ReservationStatus::Rejected | ReservationStatus::Cancelled => {}
            }
        }
    }
    if day_rules.iter().any(|rule| rule.span().overlaps(slot)) {
        return SlotStatus::Unavailable;
    }
    if has_pending {
        SlotStatus::Pending
    } else {
        SlotStatus::Available
    }
}
