//! WASM bindings for roomslot-engine.
//!
//! Exposes the day grid, the conflict check, and slot-click resolution to the
//! JavaScript booking frontend via `wasm-bindgen`. All complex types cross
//! the boundary as JSON strings in the same shape the frontend already
//! stores, so rows fetched from the backing tables can be forwarded as-is.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p roomslot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target bundler --out-dir web/src/engine/ \
//!   target/wasm32-unknown-unknown/release/roomslot_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use roomslot_engine::{
    check_conflict, day_slots, parse_date, pick_reservation, pick_rule, to_minutes, BlockingRule,
    Campus, Conflict, Reservation, Snapshot, SlotStatus, TimeSpan, SLOTS_PER_DAY,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// What [`check_conflict`] found, flattened for the frontend: a stable
/// `kind`, the message to alert, and the offending row.
#[derive(Serialize)]
struct ConflictReport {
    kind: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reservation: Option<Reservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<BlockingRule>,
}

impl From<Conflict> for ConflictReport {
    fn from(conflict: Conflict) -> Self {
        let message = conflict.to_string();
        match conflict {
            Conflict::Reservation(res) => ConflictReport {
                kind: "reservation",
                message,
                reservation: Some(res),
                rule: None,
            },
            Conflict::Rule(rule) => ConflictReport {
                kind: "rule",
                message,
                reservation: None,
                rule: Some(rule),
            },
        }
    }
}

/// Everything the details modal needs for a clicked slot.
#[derive(Serialize)]
struct SlotDetails {
    status: SlotStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    reservation: Option<Reservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<BlockingRule>,
}

// ---------------------------------------------------------------------------
// Input parsing helpers
// ---------------------------------------------------------------------------

fn parse_snapshot_json(json: &str) -> Result<Snapshot, JsValue> {
    Snapshot::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_date_js(date: &str) -> Result<NaiveDate, JsValue> {
    parse_date(date).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_campus(campus: &str) -> Result<Campus, JsValue> {
    campus
        .parse()
        .map_err(|e: roomslot_engine::EngineError| JsValue::from_str(&e.to_string()))
}

/// Parse a candidate `[start, end)` interval from two `HH:MM` strings.
fn parse_span(start: &str, end: &str) -> Result<TimeSpan, JsValue> {
    let start = to_minutes(start).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let end = to_minutes(end).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if start >= end {
        return Err(JsValue::from_str("start time must be before end time"));
    }
    Ok(TimeSpan::new(start, end))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the 32-slot day grid for one date and campus.
///
/// Returns a JSON array of 32 status strings
/// (`"available" | "pending" | "in-progress" | "unavailable"`), slot 0 being
/// 08:00-08:30.
///
/// # Arguments
/// - `snapshot_json` -- `{reservations: [...], rules: [...]}` as stored
/// - `date` -- `YYYY-MM-DD`
/// - `campus` -- `"incheon"` or `"gyeonggi"`
#[wasm_bindgen(js_name = "dayGrid")]
pub fn day_grid(snapshot_json: &str, date: &str, campus: &str) -> Result<String, JsValue> {
    let snapshot = parse_snapshot_json(snapshot_json)?;
    let date = parse_date_js(date)?;
    let campus = parse_campus(campus)?;

    let grid = day_slots(date, campus, &snapshot.reservations, &snapshot.rules);
    to_json(&grid.as_slice())
}

/// Check whether a proposed interval can be booked.
///
/// Returns `"null"` when the interval is clear, otherwise a JSON object with
/// `kind` (`"reservation"` or `"rule"`), a user-facing `message`, and the
/// offending row under `reservation` or `rule`.
///
/// # Arguments
/// - `snapshot_json` -- `{reservations: [...], rules: [...]}` as stored
/// - `date` -- `YYYY-MM-DD`
/// - `campus` -- `"incheon"` or `"gyeonggi"`
/// - `start_time`, `end_time` -- `HH:MM`, start strictly before end
#[wasm_bindgen(js_name = "checkConflict")]
pub fn check_conflict_js(
    snapshot_json: &str,
    date: &str,
    campus: &str,
    start_time: &str,
    end_time: &str,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot_json(snapshot_json)?;
    let date = parse_date_js(date)?;
    let campus = parse_campus(campus)?;
    let candidate = parse_span(start_time, end_time)?;

    let report = check_conflict(
        candidate,
        date,
        campus,
        &snapshot.reservations,
        &snapshot.rules,
    )
    .map(ConflictReport::from);
    to_json(&report)
}

/// Resolve a clicked slot to the row its details view should show.
///
/// Returns a JSON object with the slot's `status` plus the winning
/// `reservation` (highest display priority among overlaps) and the first
/// active overlapping `rule`, each omitted when absent.
///
/// # Arguments
/// - `snapshot_json` -- `{reservations: [...], rules: [...]}` as stored
/// - `date` -- `YYYY-MM-DD`
/// - `campus` -- `"incheon"` or `"gyeonggi"`
/// - `slot_index` -- 0..=31, slot 0 being 08:00-08:30
#[wasm_bindgen(js_name = "slotDetails")]
pub fn slot_details(
    snapshot_json: &str,
    date: &str,
    campus: &str,
    slot_index: u32,
) -> Result<String, JsValue> {
    let index = slot_index as usize;
    if index >= SLOTS_PER_DAY {
        return Err(JsValue::from_str(&format!(
            "slot index out of range: {slot_index}"
        )));
    }
    let snapshot = parse_snapshot_json(snapshot_json)?;
    let date = parse_date_js(date)?;
    let campus = parse_campus(campus)?;

    let grid = day_slots(date, campus, &snapshot.reservations, &snapshot.rules);
    let details = SlotDetails {
        status: grid[index],
        reservation: pick_reservation(index, date, campus, &snapshot.reservations).cloned(),
        rule: pick_rule(index, date, campus, &snapshot.rules).cloned(),
    };
    to_json(&details)
}

/// Human label for a rule's recurrence, e.g. `"every Monday"` or
/// `"monthly on the 2nd Wednesday"`.
///
/// `rule_json` is a single rule row as stored.
#[wasm_bindgen(js_name = "describeRule")]
pub fn describe_rule(rule_json: &str) -> Result<String, JsValue> {
    let rule: BlockingRule = serde_json::from_str(rule_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid rule JSON: {}", e)))?;
    Ok(rule.frequency.to_string())
}
