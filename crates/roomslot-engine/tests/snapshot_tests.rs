//! Tests for the snapshot boundary: raw table exports must deserialize
//! as-is, and nothing may silently reshape the wire format.

use chrono::NaiveDate;
use roomslot_engine::{Campus, EngineError, Frequency, ReservationStatus, Snapshot};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn parses_a_full_export() {
    let snapshot = Snapshot::from_json(
        r#"{
            "reservations": [{
                "id": "r-1",
                "campus": "incheon",
                "useDate": "2024-03-04",
                "startTime": "09:00",
                "endTime": "10:30",
                "status": "pending",
                "userId": "u-42",
                "teamName": "orchestra",
                "reason": "sectionals",
                "submittedAt": "2024-03-01T09:30:00Z"
            }],
            "rules": [
                {
                    "id": "sch-once",
                    "campus": "gyeonggi",
                    "reason": "exam period",
                    "startDate": "2024-06-01",
                    "endDate": "2024-06-14",
                    "frequencyType": "once",
                    "startTime": "08:00",
                    "endTime": "22:00"
                },
                {
                    "id": "sch-weekly",
                    "campus": "incheon",
                    "reason": "cleaning",
                    "startDate": "2024-01-01",
                    "endDate": "2024-12-31",
                    "frequencyType": "weekly",
                    "dayOfWeek": 1,
                    "startTime": "09:00",
                    "endTime": "12:00"
                },
                {
                    "id": "sch-monthly",
                    "campus": "incheon",
                    "reason": "all-hands",
                    "startDate": "2024-01-01",
                    "endDate": "2024-12-31",
                    "frequencyType": "monthly_by_week_day",
                    "weekOfMonth": 2,
                    "dayOfWeek": 3,
                    "startTime": "14:00",
                    "endTime": "16:00"
                }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(snapshot.reservations.len(), 1);
    let res = &snapshot.reservations[0];
    assert_eq!(res.campus, Campus::Incheon);
    assert_eq!(res.use_date, date(2024, 3, 4));
    assert_eq!(res.start_time.minutes(), 540);
    assert_eq!(res.end_time.minutes(), 630);
    assert_eq!(res.status, ReservationStatus::Pending);
    assert_eq!(res.owner_id, "u-42");

    assert_eq!(snapshot.rules.len(), 3);
    assert_eq!(snapshot.rules[0].frequency, Frequency::Once);
    assert_eq!(snapshot.rules[1].frequency, Frequency::Weekly { day_of_week: 1 });
    assert_eq!(
        snapshot.rules[2].frequency,
        Frequency::MonthlyByWeekday {
            week_of_month: 2,
            day_of_week: 3
        }
    );
}

#[test]
fn tolerates_null_frequency_columns_from_the_table() {
    // Table exports carry every column; a weekly rule still has a
    // weekOfMonth key, just null. It must not derail the variant.
    let snapshot = Snapshot::from_json(
        r#"{
            "reservations": [],
            "rules": [{
                "id": "sch-1",
                "campus": "incheon",
                "reason": "cleaning",
                "startDate": "2024-01-01",
                "endDate": "2024-12-31",
                "frequencyType": "weekly",
                "dayOfWeek": 5,
                "weekOfMonth": null,
                "startTime": "09:00",
                "endTime": "12:00"
            }]
        }"#,
    )
    .unwrap();
    assert_eq!(snapshot.rules[0].frequency, Frequency::Weekly { day_of_week: 5 });
}

#[test]
fn missing_lists_default_to_empty() {
    let snapshot = Snapshot::from_json("{}").unwrap();
    assert!(snapshot.reservations.is_empty());
    assert!(snapshot.rules.is_empty());
}

#[test]
fn rejects_invalid_json() {
    assert!(matches!(
        Snapshot::from_json("not json"),
        Err(EngineError::SnapshotParse(_))
    ));
}

#[test]
fn rejects_rows_with_malformed_times() {
    let result = Snapshot::from_json(
        r#"{
            "reservations": [{
                "id": "r-1",
                "campus": "incheon",
                "useDate": "2024-03-04",
                "startTime": "25:00",
                "endTime": "26:00",
                "status": "pending",
                "userId": "u-1",
                "teamName": "t",
                "reason": "r",
                "submittedAt": "2024-03-01T09:30:00Z"
            }],
            "rules": []
        }"#,
    );
    assert!(matches!(result, Err(EngineError::SnapshotParse(_))));
}

#[test]
fn rejects_unknown_campus_and_status_values() {
    let bad_campus = r#"{"reservations":[],"rules":[{
        "id":"sch-1","campus":"seoul","reason":"x",
        "startDate":"2024-01-01","endDate":"2024-12-31",
        "frequencyType":"once","startTime":"09:00","endTime":"12:00"}]}"#;
    assert!(Snapshot::from_json(bad_campus).is_err());

    let bad_status = r#"{"reservations":[{
        "id":"r-1","campus":"incheon","useDate":"2024-03-04",
        "startTime":"09:00","endTime":"10:00","status":"waitlisted",
        "userId":"u-1","teamName":"t","reason":"r",
        "submittedAt":"2024-03-01T09:30:00Z"}],"rules":[]}"#;
    assert!(Snapshot::from_json(bad_status).is_err());
}

#[test]
fn serializes_back_to_the_same_wire_shape() {
    let doc = json!({
        "reservations": [{
            "id": "r-1",
            "campus": "incheon",
            "useDate": "2024-03-04",
            "startTime": "09:00",
            "endTime": "10:30",
            "status": "approved",
            "userId": "u-42",
            "teamName": "orchestra",
            "reason": "sectionals",
            "submittedAt": "2024-03-01T09:30:00Z"
        }],
        "rules": [{
            "id": "sch-monthly",
            "campus": "incheon",
            "reason": "all-hands",
            "startDate": "2024-01-01",
            "endDate": "2024-12-31",
            "frequencyType": "monthly_by_week_day",
            "weekOfMonth": 2,
            "dayOfWeek": 3,
            "startTime": "14:00",
            "endTime": "16:00"
        }]
    });

    let snapshot = Snapshot::from_json(&doc.to_string()).unwrap();
    let back: serde_json::Value =
        serde_json::to_value(&snapshot).expect("snapshot should serialize");

    assert_eq!(back["reservations"][0]["useDate"], "2024-03-04");
    assert_eq!(back["reservations"][0]["startTime"], "09:00");
    assert_eq!(back["reservations"][0]["userId"], "u-42");
    assert_eq!(back["rules"][0]["frequencyType"], "monthly_by_week_day");
    assert_eq!(back["rules"][0]["weekOfMonth"], 2);
    assert_eq!(back["rules"][0]["startDate"], "2024-01-01");
}
