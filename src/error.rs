//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level errors live in [`crate::domain::errors`] and are wrapped here.

use crate::domain::{PhoneFormatError, ValidationError};
use thiserror::Error;

/// Errors raised by records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed name or birthday
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Phone number is not exactly ten digits
    #[error(transparent)]
    PhoneFormat(#[from] PhoneFormatError),

    /// A phone or contact that must exist does not
    #[error("{0}")]
    NotFound(NotFound),
}

/// What was missing when a [`BookError::NotFound`] was raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFound {
    /// No stored phone matched
    #[error("Old phone number not found")]
    Phone(String),

    /// No contact with that name
    #[error("Contact not found")]
    Contact(String),
}

impl BookError {
    /// Shorthand for a missing phone.
    pub fn phone_not_found(phone: impl Into<String>) -> Self {
        Self::NotFound(NotFound::Phone(phone.into()))
    }

    /// Shorthand for a missing contact.
    pub fn contact_not_found(name: impl Into<String>) -> Self {
        Self::NotFound(NotFound::Contact(name.into()))
    }
}

/// Errors returned by shell command handlers.
///
/// Every variant is recoverable: the session prints it and reads the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Too few arguments for the command
    #[error("Not enough arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },

    /// Command word not recognised
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Error from the address book
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(err.into())
    }
}

impl From<PhoneFormatError> for CommandError {
    fn from(err: PhoneFormatError) -> Self {
        Self::Book(err.into())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::phone_not_found("0501234567");
        assert_eq!(err.to_string(), "Old phone number not found");

        let err = BookError::contact_not_found("Alice");
        assert_eq!(err.to_string(), "Contact not found");

        let err = BookError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = CommandError::from(PhoneFormatError("1".to_string()));
        assert_eq!(
            err.to_string(),
            "Phone number must contain exactly 10 digits"
        );
    }

    #[test]
    fn test_command_error_variants() {
        let err = CommandError::MissingArguments {
            usage: "phone <name>",
        };
        assert_eq!(err.to_string(), "Not enough arguments. Usage: phone <name>");

        let err = CommandError::UnknownCommand("fly".to_string());
        assert_eq!(err.to_string(), "Invalid command.");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_WINDOW_DAYS"));
    }
}
