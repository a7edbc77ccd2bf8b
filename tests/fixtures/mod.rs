//! Test fixtures and sample data for integration tests.
//!
//! Reusable builders for records, address books and dates.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Build a date, panicking on invalid input.
#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a sample record with the given phones and optional birthday.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(raw) = birthday {
        record.set_birthday(raw).unwrap();
    }
    record
}

/// Create an address book holding the given records, in order.
#[allow(dead_code)]
pub fn sample_book(records: Vec<Record>) -> AddressBook {
    let mut book = AddressBook::new();
    for record in records {
        book.add_record(record);
    }
    book
}
