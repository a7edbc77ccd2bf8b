//! Interactive command shell.
//!
//! Tokenizes input lines, dispatches them to handlers and prints whatever the
//! handlers return. All state lives in the [`Session`]'s address book.

mod command;
pub mod handlers;
mod session;

pub use command::{parse_input, Command};
pub use session::{Outcome, Session, FAREWELL, PROMPT, WELCOME};
