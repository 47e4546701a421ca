//! Reservation lifecycle -- the transition table for review and
//! cancellation, plus the admin review queue.
//!
//! The engine only decides whether a transition is legal. Verifying that the
//! caller really is the owner or an administrator is the auth collaborator's
//! job; persisting the new status is the storage collaborator's.

use std::cmp::Reverse;
use std::fmt;

use thiserror::Error;

use crate::model::{Reservation, ReservationStatus};

/// Who is requesting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// The user who submitted the reservation.
    Owner,
    /// An administrator working the review queue.
    Admin,
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Actor::Owner => "owner",
            Actor::Admin => "admin",
        })
    }
}

/// A requested lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    Approve,
    Reject,
    Cancel,
}

impl fmt::Display for ReservationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReservationAction::Approve => "approve",
            ReservationAction::Reject => "reject",
            ReservationAction::Cancel => "cancel",
        })
    }
}

/// A transition the table does not permit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("reservation is {status}: {actor} may not {action} it")]
pub struct TransitionError {
    pub status: ReservationStatus,
    pub action: ReservationAction,
    pub actor: Actor,
}

/// Apply a lifecycle action to a reservation status.
///
/// Exactly three transitions are permitted: an admin approves or rejects a
/// pending reservation, and the owner cancels their own while it is still
/// pending. Everything else (double approval, cancelling after review,
/// owners approving themselves) is refused. Whether an approved reservation
/// can later be withdrawn is application policy, deliberately outside this
/// table.
pub fn apply_transition(
    status: ReservationStatus,
    action: ReservationAction,
    actor: Actor,
) -> Result<ReservationStatus, TransitionError> {
    match (status, action, actor) {
        (ReservationStatus::Pending, ReservationAction::Approve, Actor::Admin) => {
            Ok(ReservationStatus::Approved)
        }
        (ReservationStatus::Pending, ReservationAction::Reject, Actor::Admin) => {
            Ok(ReservationStatus::Rejected)
        }
        (ReservationStatus::Pending, ReservationAction::Cancel, Actor::Owner) => {
            Ok(ReservationStatus::Cancelled)
        }
        _ => Err(TransitionError {
            status,
            action,
            actor,
        }),
    }
}

/// The admin review queue: pending reservations only, newest submission
/// first. Input order breaks timestamp ties.
pub fn pending_queue(reservations: &[Reservation]) -> Vec<&Reservation> {
    let mut queue: Vec<&Reservation> = reservations
        .iter()
        .filter(|res| res.status == ReservationStatus::Pending)
        .collect();
    queue.sort_by_key(|res| Reverse(res.submitted_at));
    queue
}
