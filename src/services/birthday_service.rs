//! Birthday reminder service.
//!
//! Finds the contacts whose next birthday falls inside a window starting
//! today. The reference date is always passed in, never read from a clock.

use crate::domain::{Birthday, BIRTHDAY_FORMAT};
use crate::models::Record;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Default window length in days, inclusive of both ends.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// A contact whose birthday is coming up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Date the birthday is observed on, in the current or next year
    pub date: NaiveDate,

    /// Day of week of `date`
    pub weekday: Weekday,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.name,
            self.date.format("%A"),
            self.date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// Computes upcoming birthdays over a fixed window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayReminder {
    window_days: i64,
}

impl BirthdayReminder {
    /// Create a reminder covering `today ..= today + window_days`.
    pub fn new(window_days: i64) -> Self {
        Self { window_days }
    }

    /// Last day offset included in the window.
    pub fn window_days(&self) -> i64 {
        self.window_days
    }

    /// Upcoming birthdays, in the order the records are given.
    ///
    /// Records without a birthday are skipped. An empty result means nobody
    /// has a birthday in the window.
    pub fn upcoming<'a, I>(&self, records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let matches: Vec<UpcomingBirthday> = records
            .into_iter()
            .filter_map(|record| {
                let date = next_occurrence(record.birthday()?, today)?;
                let days = (date - today).num_days();
                (0..=self.window_days)
                    .contains(&days)
                    .then(|| UpcomingBirthday {
                        name: record.name().to_string(),
                        date,
                        weekday: date.weekday(),
                    })
            })
            .collect();

        debug!(
            today = %today,
            window_days = self.window_days,
            matches = matches.len(),
            "computed upcoming birthdays"
        );
        matches
    }
}

impl Default for BirthdayReminder {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

/// Upcoming birthdays within the default seven-day window.
pub fn upcoming_birthdays<'a, I>(records: I, today: NaiveDate) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    BirthdayReminder::default().upcoming(records, today)
}

/// The first observance of `birthday` on or after `today`.
///
/// Uses this year's date unless it has already passed, then next year's.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}
