//! Command words and input tokenizing.

use crate::error::CommandError;
use std::str::FromStr;

/// Commands understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Help,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Every command, in the order `help` lists them.
    pub const ALL: [Command; 12] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::RemovePhone,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Usage line shown in `help` and on missing arguments.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add <name> <phone>",
            Command::Change => "change <name> <old phone> <new phone>",
            Command::Phone => "phone <name>",
            Command::All => "all",
            Command::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Command::ShowBirthday => "show-birthday <name>",
            Command::Birthdays => "birthdays",
            Command::RemovePhone => "remove-phone <name> <phone>",
            Command::Delete => "delete <name>",
            Command::Help => "help",
            Command::Exit => "close | exit",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "help" => Ok(Command::Help),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(s.to_string())),
        }
    }
}

/// Split a line into a lower-cased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}
