//! Application service layer.
//!
//! Services hold the logic that works across many records at once.

mod birthday_service;

pub use birthday_service::{
    next_occurrence, upcoming_birthdays, BirthdayReminder, UpcomingBirthday, DEFAULT_WINDOW_DAYS,
};
