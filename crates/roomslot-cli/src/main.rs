//! `roomslot` CLI — inspect availability snapshots and pre-check bookings
//! from the command line.
//!
//! Every subcommand reads a snapshot document (`{reservations: [...],
//! rules: [...]}`, the raw table export) from `--snapshot FILE` or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Render the day grid for a campus
//! roomslot day -s snapshot.json --date 2024-03-04 --campus incheon
//!
//! # Pre-check a booking (exits non-zero with the reason on a conflict)
//! roomslot check -s snapshot.json --date 2024-03-04 --campus incheon \
//!   --start 09:00 --end 10:30
//!
//! # Show what a clicked slot stands for (slot 2 = 09:00-09:30)
//! roomslot slot -s snapshot.json --date 2024-03-04 --campus incheon --index 2
//!
//! # List the blocking rules active on a date
//! cat snapshot.json | roomslot rules --date 2024-03-04 --campus incheon
//! ```

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use roomslot_engine::{
    active_rules, check_conflict, day_slots, parse_date, pick_reservation, pick_rule, slot_label,
    slot_span, to_minutes, Campus, Snapshot, SlotStatus, TimeSpan, SLOTS_PER_DAY,
};

#[derive(Parser)]
#[command(
    name = "roomslot",
    version,
    about = "Room booking availability from a snapshot export"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the 32-slot day grid for one date and campus
    Day {
        /// Snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        snapshot: Option<String>,
        /// Date to render, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Campus: incheon or gyeonggi
        #[arg(long)]
        campus: String,
    },
    /// Check whether an interval can be booked
    Check {
        /// Snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        snapshot: Option<String>,
        /// Booking date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Campus: incheon or gyeonggi
        #[arg(long)]
        campus: String,
        /// Start time, HH:MM
        #[arg(long)]
        start: String,
        /// End time, HH:MM (must be after start)
        #[arg(long)]
        end: String,
        /// Treat this date as today instead of the system date
        #[arg(long, value_name = "DATE")]
        today: Option<String>,
    },
    /// Show which reservation and rule a slot stands for
    Slot {
        /// Snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        snapshot: Option<String>,
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Campus: incheon or gyeonggi
        #[arg(long)]
        campus: String,
        /// Slot index, 0..=31 (slot 0 is 08:00-08:30)
        #[arg(long)]
        index: usize,
    },
    /// List the blocking rules active on a date
    Rules {
        /// Snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        snapshot: Option<String>,
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Campus: incheon or gyeonggi
        #[arg(long)]
        campus: String,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Day {
            snapshot,
            date,
            campus,
        } => {
            let snap = read_snapshot(snapshot.as_deref())?;
            let date = parse_date(&date)?;
            let campus: Campus = campus.parse()?;

            let grid = day_slots(date, campus, &snap.reservations, &snap.rules);
            println!("{} {} ({})", campus, date, date.format("%A"));
            println!();
            let strip: String = grid.iter().map(|s| status_char(*s)).collect();
            println!("  08:00-16:00  {}", &strip[..16]);
            println!("  16:00-00:00  {}", &strip[16..]);

            let busy: Vec<(usize, usize, SlotStatus)> = runs(&grid)
                .into_iter()
                .filter(|(_, _, status)| *status != SlotStatus::Available)
                .collect();
            println!();
            if busy.is_empty() {
                println!("  all slots available");
            } else {
                for (start, end, status) in busy {
                    println!("  {}-{}  {}", slot_label(start), slot_label(end), status);
                }
            }
            println!();
            println!("  legend: . available  p pending  # in-progress  x unavailable");
        }
        Commands::Check {
            snapshot,
            date,
            campus,
            start,
            end,
            today,
        } => {
            let snap = read_snapshot(snapshot.as_deref())?;
            let date = parse_date(&date)?;
            let campus: Campus = campus.parse()?;
            let today = match today.as_deref() {
                Some(t) => parse_date(t)?,
                None => Local::now().date_naive(),
            };
            if date < today {
                bail!("cannot book {date}: it is in the past (today is {today})");
            }

            let start = to_minutes(&start)?;
            let end = to_minutes(&end)?;
            if start >= end {
                bail!("start time must be before end time");
            }
            let candidate = TimeSpan::new(start, end);

            if let Some(conflict) =
                check_conflict(candidate, date, campus, &snap.reservations, &snap.rules)
            {
                return Err(conflict.into());
            }
            println!("ok: {} {} at {} is free to book", date, candidate, campus);
        }
        Commands::Slot {
            snapshot,
            date,
            campus,
            index,
        } => {
            if index >= SLOTS_PER_DAY {
                bail!("slot index out of range: {index} (the grid has {SLOTS_PER_DAY} slots)");
            }
            let snap = read_snapshot(snapshot.as_deref())?;
            let date = parse_date(&date)?;
            let campus: Campus = campus.parse()?;

            let grid = day_slots(date, campus, &snap.reservations, &snap.rules);
            println!("slot {} ({})  status: {}", index, slot_span(index), grid[index]);

            match pick_reservation(index, date, campus, &snap.reservations) {
                Some(res) => println!(
                    "  reservation: {} [{}] {} {} ({})",
                    res.id,
                    res.status,
                    res.span(),
                    res.team_name,
                    res.reason
                ),
                None => println!("  reservation: none"),
            }
            match pick_rule(index, date, campus, &snap.rules) {
                Some(rule) => println!(
                    "  rule: {} [{}] {} ({})",
                    rule.id,
                    rule.frequency,
                    rule.span(),
                    rule.reason
                ),
                None => println!("  rule: none"),
            }
        }
        Commands::Rules {
            snapshot,
            date,
            campus,
        } => {
            let snap = read_snapshot(snapshot.as_deref())?;
            let date = parse_date(&date)?;
            let campus: Campus = campus.parse()?;

            let active: Vec<_> = active_rules(&snap.rules, date, campus).collect();
            if active.is_empty() {
                println!("no rules active on {} at {}", date, campus);
            } else {
                println!("{} rule(s) active on {} at {}:", active.len(), date, campus);
                for rule in active {
                    println!(
                        "  {}  {}  {}  {}",
                        rule.id,
                        rule.span(),
                        rule.frequency,
                        rule.reason
                    );
                }
            }
        }
    }

    Ok(())
}

fn status_char(status: SlotStatus) -> char {
    match status {
        SlotStatus::Available => '.',
        SlotStatus::Pending => 'p',
        SlotStatus::InProgress => '#',
        SlotStatus::Unavailable => 'x',
    }
}

/// Merge consecutive identical slots into `(start_boundary, end_boundary,
/// status)` runs; boundaries are slot-label indices.
fn runs(grid: &[SlotStatus]) -> Vec<(usize, usize, SlotStatus)> {
    let mut out = Vec::new();
    let mut start = 0;
    for i in 1..=grid.len() {
        if i == grid.len() || grid[i] != grid[start] {
            out.push((start, i, grid[start]));
            start = i;
        }
    }
    out
}

fn read_snapshot(path: Option<&str>) -> Result<Snapshot> {
    let json = read_input(path)?;
    Snapshot::from_json(&json).context("Failed to parse snapshot JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
