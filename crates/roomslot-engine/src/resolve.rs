//! Slot-click resolution -- which single row a rendered slot stands for.
//!
//! The grid collapses overlapping rows into one status per slot; when the
//! user clicks a slot, these functions pick the row whose details to open.

use std::ops::ControlFlow;

use chrono::NaiveDate;

use crate::model::{BlockingRule, Campus, Reservation, ReservationStatus};
use crate::recurrence::active_rules;
use crate::slots::slot_span;

/// The reservation a clicked slot should show details for.
///
/// Among reservations on `date`/`campus` that overlap slot `index`, the
/// highest display priority wins (approved > pending > rejected, see
/// [`ReservationStatus::priority`]); ties keep the earliest in input order,
/// and cancelled rows are never picked. The fold stops at the first approved
/// hit, which no later row can outrank.
pub fn pick_reservation<'a>(
    index: usize,
    date: NaiveDate,
    campus: Campus,
    reservations: &'a [Reservation],
) -> Option<&'a Reservation> {
    let slot = slot_span(index);
    let fold = reservations
        .iter()
        .filter(|res| res.occupies(date, campus) && res.span().overlaps(slot))
        .try_fold(None::<&Reservation>, |best, res| {
            let best_priority = best.map_or(0, |b| b.status.priority());
            let next = if res.status.priority() > best_priority {
                Some(res)
            } else {
                best
            };
            if res.status == ReservationStatus::Approved {
                ControlFlow::Break(next)
            } else {
                ControlFlow::Continue(next)
            }
        });
    match fold {
        ControlFlow::Continue(best) | ControlFlow::Break(best) => best,
    }
}

/// The blocking rule a clicked unavailable slot should show details for:
/// the first rule in input order that is active on `date` and overlaps the
/// slot. Further overlapping rules are acceptable display ambiguity; the
/// grid treats them all identically.
pub fn pick_rule<'a>(
    index: usize,
    date: NaiveDate,
    campus: Campus,
    rules: &'a [BlockingRule],
) -> Option<&'a BlockingRule> {
    let slot = slot_span(index);
    active_rules(rules, date, campus).find(|rule| rule.span().overlaps(slot))
}
