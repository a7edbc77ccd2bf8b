//! Domain value objects and types.
//!
//! This module contains the validated fields of a contact: its name, its
//! phone numbers and its birthday. Each value object validates at
//! construction time, so malformed input is rejected before it can reach a
//! record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use errors::{PhoneFormatError, ValidationError};
pub use name::Name;
pub use phone::{Phone, PHONE_DIGITS};
