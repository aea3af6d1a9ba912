//! Command parsing.
//!
//! Turns one line of user input into a `Command` and its arguments. The
//! command word is case-insensitive; arguments are kept as typed.

mod parser;

pub use parser::{parse_input, Command, ParsedInput};
