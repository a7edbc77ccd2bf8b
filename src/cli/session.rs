//! Read-eval-print loop over the address book.

use super::command::{parse_input, Command};
use super::handlers;
use crate::clock::Clock;
use crate::error::CommandResult;
use crate::models::AddressBook;
use crate::services::BirthdayReminder;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// What the loop should do after one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),
    /// Nothing to print (blank line)
    Silent,
    /// Print the text and stop
    Exit(String),
}

/// One interactive session. Owns the address book for its lifetime.
pub struct Session<C: Clock> {
    book: AddressBook,
    reminder: BirthdayReminder,
    clock: C,
}

impl<C: Clock> Session<C> {
    /// Start a session with an empty address book.
    pub fn new(clock: C, reminder: BirthdayReminder) -> Self {
        Self {
            book: AddressBook::new(),
            reminder,
            clock,
        }
    }

    /// The address book built so far.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one input line. Failures become replies; none of them end the session.
    pub fn execute(&mut self, line: &str) -> Outcome {
        let Some((word, args)) = parse_input(line) else {
            return Outcome::Silent;
        };

        let result = word.parse::<Command>().and_then(|command| {
            let reply = self.dispatch(command, &args)?;
            Ok(match command {
                Command::Exit => Outcome::Exit(reply),
                _ => Outcome::Reply(reply),
            })
        });

        result.unwrap_or_else(|err| {
            warn!(command = %word, error = ?err, "command rejected");
            Outcome::Reply(err.to_string())
        })
    }

    fn dispatch(&mut self, command: Command, args: &[&str]) -> CommandResult<String> {
        debug!(?command, args = args.len(), "dispatching command");
        match command {
            Command::Hello => Ok(handlers::hello()),
            Command::Add => handlers::add_contact(args, &mut self.book),
            Command::Change => handlers::change_contact(args, &mut self.book),
            Command::Phone => handlers::show_phones(args, &self.book),
            Command::All => Ok(handlers::show_all(&self.book)),
            Command::AddBirthday => handlers::add_birthday(args, &mut self.book),
            Command::ShowBirthday => handlers::show_birthday(args, &self.book),
            Command::Birthdays => Ok(handlers::birthdays(
                &self.book,
                &self.reminder,
                self.clock.today(),
            )),
            Command::RemovePhone => handlers::remove_phone(args, &mut self.book),
            Command::Delete => handlers::delete_contact(args, &mut self.book),
            Command::Help => Ok(handlers::help()),
            Command::Exit => Ok(FAREWELL.to_string()),
        }
    }

    /// Run until `close`/`exit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }

            // Undecodable bytes become U+FFFD and fail as an unknown command.
            let line = String::from_utf8_lossy(&buf);
            match self.execute(&line) {
                Outcome::Reply(text) => writeln!(output, "{}", text)?,
                Outcome::Silent => {}
                Outcome::Exit(text) => {
                    writeln!(output, "{}", text)?;
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn session() -> Session<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        Session::new(FixedClock(today), BirthdayReminder::default())
    }

    fn reply(text: &str) -> Outcome {
        Outcome::Reply(text.to_string())
    }

    #[test]
    fn test_execute_replies() {
        let mut session = session();
        assert_eq!(session.execute("hello"), reply("How can I help you?"));
        assert_eq!(session.execute("add John 1111111111"), reply("Contact added."));
        assert_eq!(session.execute("PHONE John"), reply("John: 1111111111"));
        assert_eq!(session.book().len(), 1);
    }

    #[test]
    fn test_execute_errors_are_replies() {
        let mut session = session();
        assert_eq!(session.execute("fly away"), reply("Invalid command."));
        assert_eq!(session.execute("phone Nobody"), reply("Contact not found"));
        assert_eq!(
            session.execute("phone"),
            reply("Not enough arguments. Usage: phone <name>")
        );
    }

    #[test]
    fn test_execute_blank_and_exit() {
        let mut session = session();
        assert_eq!(session.execute("   "), Outcome::Silent);
        assert_eq!(session.execute("close"), Outcome::Exit("Good bye!".to_string()));
        assert_eq!(session.execute("EXIT"), Outcome::Exit("Good bye!".to_string()));
    }

    #[test]
    fn test_birthdays_use_clock() {
        let mut session = session();
        session.execute("add Ann 1111111111");
        session.execute("add-birthday Ann 12.03.1990");
        assert_eq!(
            session.execute("birthdays"),
            reply("Ann: Tuesday (12.03.2024)")
        );
    }

    #[test]
    fn test_run_stops_on_exit() {
        let mut session = session();
        let input = b"hello\nexit\nhello\n";
        let mut output = Vec::new();
        session.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Good bye!\n"
        );
    }

    #[test]
    fn test_run_survives_invalid_utf8() {
        let mut session = session();
        let input = b"\xff\xfe\nhello\nexit\n";
        let mut output = Vec::new();
        session.run(&input[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Enter a command: Invalid command.\n"));
        assert!(text.contains("How can I help you?"));
        assert!(text.ends_with("Good bye!\n"));
    }

    #[test]
    fn test_run_stops_on_end_of_input() {
        let mut session = session();
        let mut output = Vec::new();
        session.run(&b""[..], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("Enter a command: \nGood bye!\n"));
    }
}
