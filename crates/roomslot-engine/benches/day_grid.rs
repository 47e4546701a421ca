//! Benchmarks for the two hot paths: one day-grid computation (what a
//! calendar render costs) and one conflict check (what a form submit costs).
//!
//! Both should stay linear in the row count; a month view calls `day_slots`
//! once per visible day.

use std::hint::black_box;

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use roomslot_engine::{
    check_conflict, day_slots, BlockingRule, Campus, Frequency, Reservation, ReservationStatus,
    TimeOfDay, TimeSpan,
};

fn tod(minutes: u16) -> TimeOfDay {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
        .parse()
        .unwrap()
}

/// A plausible month of traffic: a few hundred reservations in mixed states
/// across both campuses, plus a handful of recurring rules.
fn synthetic_rows() -> (Vec<Reservation>, Vec<BlockingRule>) {
    let statuses = [
        ReservationStatus::Pending,
        ReservationStatus::Approved,
        ReservationStatus::Rejected,
        ReservationStatus::Cancelled,
    ];

    let reservations = (0..300usize)
        .map(|i| {
            let start = 480 + 30 * (i % 30) as u16;
            Reservation {
                id: format!("r-{i}"),
                campus: if i % 5 == 0 {
                    Campus::Gyeonggi
                } else {
                    Campus::Incheon
                },
                use_date: NaiveDate::from_ymd_opt(2024, 3, 1 + (i % 28) as u32).unwrap(),
                start_time: tod(start),
                end_time: tod(start + 30 + 15 * (i % 3) as u16),
                status: statuses[i % statuses.len()],
                owner_id: format!("u-{}", i % 40),
                team_name: format!("team-{}", i % 12),
                reason: "meeting".to_string(),
                submitted_at: Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
            }
        })
        .collect();

    let frequencies = [
        Frequency::Once,
        Frequency::Weekly { day_of_week: 1 },
        Frequency::Weekly { day_of_week: 3 },
        Frequency::MonthlyByWeekday {
            week_of_month: 2,
            day_of_week: 3,
        },
    ];
    let rules = (0..20usize)
        .map(|i| BlockingRule {
            id: format!("sch-{i}"),
            campus: if i % 2 == 0 {
                Campus::Incheon
            } else {
                Campus::Gyeonggi
            },
            reason: "recurring block".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            frequency: frequencies[i % frequencies.len()],
            start_time: tod(540 + 60 * (i % 8) as u16),
            end_time: tod(660 + 60 * (i % 8) as u16),
        })
        .collect();

    (reservations, rules)
}

fn bench_engine(c: &mut Criterion) {
    let (reservations, rules) = synthetic_rows();
    let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    c.bench_function("day_slots/320_rows", |b| {
        b.iter(|| {
            day_slots(
                black_box(date),
                Campus::Incheon,
                black_box(&reservations),
                black_box(&rules),
            )
        })
    });

    c.bench_function("day_slots/month_walk", |b| {
        b.iter(|| {
            for day in 1..=31 {
                let d = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
                black_box(day_slots(d, Campus::Incheon, &reservations, &rules));
            }
        })
    });

    c.bench_function("check_conflict/320_rows", |b| {
        b.iter(|| {
            check_conflict(
                black_box(TimeSpan::new(840, 930)),
                black_box(date),
                Campus::Incheon,
                black_box(&reservations),
                black_box(&rules),
            )
        })
    });
}

criterion_group!(benches, bench_engine);
criterion_main!(benches);
