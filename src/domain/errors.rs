//! Field validation errors.

use std::fmt;

/// Errors raised when a name or birthday fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A phone number that is not exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneFormatError(pub String);

impl PhoneFormatError {
    /// The rejected input.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Phone number must contain exactly 10 digits")
    }
}

impl std::error::Error for PhoneFormatError {}
