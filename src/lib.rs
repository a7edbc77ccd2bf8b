//! Contact Book - an interactive command-line address book with birthday reminders.
//!
//! Contacts are held in memory for the lifetime of the process. Every field is
//! validated when it is created, and every failing command reports a typed
//! error that the shell turns into a message before reading the next line.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`)
//! - **models**: `Record` and the `AddressBook` that owns them
//! - **services**: Upcoming-birthday computation
//! - **cli**: Command parsing, handlers and the read-eval-print session
//! - **clock**: Source of today's date
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

pub use cli::Session;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, PhoneFormatError, ValidationError};
pub use error::{BookError, CommandError, ConfigError, NotFound};
pub use models::{AddressBook, Record};
pub use services::{upcoming_birthdays, BirthdayReminder, UpcomingBirthday};
