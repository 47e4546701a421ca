//! # roomslot-engine
//!
//! Availability resolution engine for a two-campus room booking system.
//!
//! Given a calendar date, a campus, and a point-in-time snapshot of submitted
//! reservations and admin blocking rules, the engine answers the two
//! questions every booking surface asks: what is the occupancy status of
//! each 30-minute slot in the day, and does a proposed interval conflict
//! with anything already on the calendar. It is a pure library: no storage,
//! no authorization, no clock, no background work. Callers hand it immutable
//! snapshots and render the values it returns.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roomslot_engine::{check_conflict, day_slots, Campus, Snapshot, TimeSpan};
//!
//! let snapshot = Snapshot::from_json(
//!     r#"{
//!         "reservations": [{
//!             "id": "r-1", "campus": "incheon", "useDate": "2024-03-04",
//!             "startTime": "09:00", "endTime": "10:00", "status": "approved",
//!             "userId": "u-7", "teamName": "chess club", "reason": "weekly meet",
//!             "submittedAt": "2024-03-01T09:30:00Z"
//!         }],
//!         "rules": []
//!     }"#,
//! ).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let grid = day_slots(date, Campus::Incheon, &snapshot.reservations, &snapshot.rules);
//! assert_eq!(grid[2].to_string(), "in-progress"); // 09:00-09:30
//!
//! // 09:30-10:30 collides with the approved booking.
//! let conflict = check_conflict(
//!     TimeSpan::new(570, 630),
//!     date,
//!     Campus::Incheon,
//!     &snapshot.reservations,
//!     &snapshot.rules,
//! );
//! assert!(conflict.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` parsing, minute offsets, half-open interval overlap
//! - [`model`] — Reservations, blocking rules, and the `Snapshot` boundary
//! - [`recurrence`] — Rule date matching (Sunday-anchored week-of-month)
//! - [`slots`] — The 32-slot day grid aggregation
//! - [`conflict`] — Can this interval be booked, and if not, why
//! - [`resolve`] — Which row a clicked slot stands for
//! - [`lifecycle`] — Review/cancel transition table and the pending queue
//! - [`error`] — Error types

pub mod clock;
pub mod conflict;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod recurrence;
pub mod resolve;
pub mod slots;

pub use clock::{parse_date, to_minutes, Minutes, TimeOfDay, TimeSpan};
pub use conflict::{check_conflict, Conflict};
pub use error::EngineError;
pub use lifecycle::{apply_transition, pending_queue, Actor, ReservationAction, TransitionError};
pub use model::{BlockingRule, Campus, Frequency, Reservation, ReservationStatus, Snapshot};
pub use recurrence::{active_rules, occurrence_index, weekday_index};
pub use resolve::{pick_reservation, pick_rule};
pub use slots::{
    day_slots, slot_label, slot_span, SlotStatus, DAY_START_MINUTE, SLOTS_PER_DAY, SLOT_MINUTES,
};
