//! Command handlers.
//!
//! Each handler takes the already-split arguments, works on the address book
//! and returns the text to print. Errors are returned, never printed here.

use super::command::Command;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::services::BirthdayReminder;
use chrono::NaiveDate;

/// Take the first `N` arguments, ignoring any extra ones.
fn take_args<'a, const N: usize>(
    args: &[&'a str],
    command: Command,
) -> CommandResult<[&'a str; N]> {
    args.get(..N)
        .and_then(|head| <[&'a str; N]>::try_from(head).ok())
        .ok_or(CommandError::MissingArguments {
            usage: command.usage(),
        })
}

fn existing<'b>(book: &'b AddressBook, name: &str) -> CommandResult<&'b Record> {
    book.find(name)
        .ok_or_else(|| BookError::contact_not_found(name).into())
}

fn existing_mut<'b>(book: &'b mut AddressBook, name: &str) -> CommandResult<&'b mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::contact_not_found(name).into())
}

pub fn hello() -> String {
    "How can I help you?".to_string()
}

/// `add <name> <phone>`: create the contact or append a phone to it.
///
/// The phone is validated before a new contact is stored.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = take_args(args, Command::Add)?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old_phone, new_phone] = take_args(args, Command::Change)?;
    existing_mut(book, name)?.edit_phone(old_phone, new_phone)?;
    Ok("Phone number updated.".to_string())
}

/// `phone <name>`
pub fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = take_args(args, Command::Phone)?;
    let phones = existing(book, name)?
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("{}: {}", name, phones))
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Empty address book".to_string();
    }
    book.values()
        .map(Record::describe)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = take_args(args, Command::AddBirthday)?;
    existing_mut(book, name)?.set_birthday(birthday)?;
    Ok("Birthday is added".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = take_args(args, Command::ShowBirthday)?;
    Ok(match existing(book, name)?.birthday() {
        Some(birthday) => format!("{} has birthday on {}", name, birthday),
        None => "No birthday".to_string(),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, reminder: &BirthdayReminder, today: NaiveDate) -> String {
    let upcoming = reminder.upcoming(book.values(), today);
    if upcoming.is_empty() {
        return no_birthdays_message(reminder.window_days());
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn no_birthdays_message(window_days: i64) -> String {
    match window_days {
        0 => "No birthdays today".to_string(),
        1 => "No birthdays today or tomorrow".to_string(),
        7 => "No birthdays next week".to_string(),
        days => format!("No birthdays in the next {} days", days),
    }
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = take_args(args, Command::RemovePhone)?;
    match existing_mut(book, name)?.remove_phone(phone) {
        0 => Ok("Phone number not found".to_string()),
        _ => Ok("Phone number removed.".to_string()),
    }
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = take_args(args, Command::Delete)?;
    book.delete(name)
        .map(|_| "Contact deleted.".to_string())
        .ok_or_else(|| BookError::contact_not_found(name).into())
}

/// `help`
pub fn help() -> String {
    let lines: Vec<String> = Command::ALL
        .iter()
        .map(|command| format!("  {}", command.usage()))
        .collect();
    format!("Available commands:\n{}", lines.join("\n"))
}
