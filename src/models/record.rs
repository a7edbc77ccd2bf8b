//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, PhoneFormatError, ValidationError};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// One contact: a name, its phone numbers and an optional birthday.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one was set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), PhoneFormatError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`, returning how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old_phone`, keeping its position.
    ///
    /// # Errors
    ///
    /// `NotFound` if `old_phone` is not stored (checked first), otherwise
    /// `PhoneFormat` if `new_phone` is invalid.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> BookResult<()> {
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old_phone)
            .ok_or_else(|| BookError::phone_not_found(old_phone))?;

        slot.edit(new_phone)?;
        debug!(contact = %self.name, old_phone, new_phone, "phone edited");
        Ok(())
    }

    /// First stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and store a birthday, overwriting any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }

    /// Human-readable one-line summary used by `all`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
