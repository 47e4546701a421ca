//! Recurring-rule date matching -- decides whether a blocking rule is active
//! on a given calendar date.
//!
//! Week-of-month here is NOT the conventional "nth weekday of the month":
//! occurrences are counted in seven-day windows anchored to the month's first
//! Sunday. A weekday that falls before the first Sunday belongs to occurrence
//! zero (or below) and matches no rule. The booking frontend has always
//! counted this way, and stored rules depend on it, so the scheme is
//! reproduced exactly rather than normalized.

use chrono::{Datelike, NaiveDate};

use crate::model::{BlockingRule, Campus, Frequency};

/// Weekday index with 0 = Sunday .. 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Which Sunday-anchored occurrence window of its month `date` falls in.
///
/// The first window is the seven days starting at the month's first Sunday,
/// the second window the seven days after that, and so on. Dates before the
/// first Sunday yield 0 or negative, which never matches a stored
/// `week_of_month >= 1`.
///
/// The anchor is always Sunday regardless of the weekday a rule targets, so
/// the "1st Wednesday" means the Wednesday inside the first Sunday-anchored
/// window, which is not always the month's first Wednesday by conventional
/// counting.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roomslot_engine::occurrence_index;
///
/// // March 2024 starts on a Friday; its first Sunday is the 3rd.
/// let fri_1st = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let wed_13th = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
/// assert_eq!(occurrence_index(fri_1st), 0); // before the first Sunday
/// assert_eq!(occurrence_index(wed_13th), 2);
/// ```
pub fn occurrence_index(date: NaiveDate) -> i32 {
    let day = date.day() as i32;
    // Weekday of the 1st of the month, stepping back from `date` so no
    // fallible date construction is needed.
    let first_weekday = (i32::from(weekday_index(date)) - (day - 1)).rem_euclid(7);
    let first_sunday = if first_weekday == 0 {
        1
    } else {
        1 + (7 - first_weekday)
    };
    // Euclidean division keeps floor semantics when `day` precedes the first
    // Sunday; truncating division would round those toward zero.
    (day - first_sunday).div_euclid(7) + 1
}

impl BlockingRule {
    /// True when this rule blocks time on `date`.
    ///
    /// The validity window `[start_date, end_date]` is inclusive on both
    /// ends; inside it the frequency decides:
    /// `Once` matches every date, `Weekly` matches on its weekday, and
    /// `MonthlyByWeekday` matches when both the weekday and the
    /// Sunday-anchored [`occurrence_index`] line up.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        if date < self.start_date || date > self.end_date {
            return false;
        }
        match self.frequency {
            Frequency::Once => true,
            Frequency::Weekly { day_of_week } => weekday_index(date) == day_of_week,
            Frequency::MonthlyByWeekday {
                week_of_month,
                day_of_week,
            } => {
                occurrence_index(date) == i32::from(week_of_month)
                    && weekday_index(date) == day_of_week
            }
        }
    }
}

/// Rules that block time on `date` at `campus`, in input order.
///
/// Shared prefilter for the slot grid, the conflict checker, and slot-click
/// resolution, so all three always agree on which rules govern a day.
pub fn active_rules<'a>(
    rules: &'a [BlockingRule],
    date: NaiveDate,
    campus: Campus,
) -> impl Iterator<Item = &'a BlockingRule> {
    rules
        .iter()
        .filter(move |rule| rule.campus == campus && rule.is_active_on(date))
}
