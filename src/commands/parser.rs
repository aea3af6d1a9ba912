use crate::error::{CommandError, CommandResult};
use std::fmt;

/// A command understood by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    /// `close` or `exit`
    Exit,
    /// Any other command word, lower-cased
    Unknown(String),
}

impl Command {
    fn from_word(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Name used in argument errors and logs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Exit => "exit",
            Self::Unknown(word) => word,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Borrow exactly `N` arguments.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidArguments` when the argument count differs.
    pub fn expect_args<const N: usize>(
        &self,
        command: &'static str,
    ) -> CommandResult<[&str; N]> {
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.try_into().map_err(|args: Vec<&str>| CommandError::InvalidArguments {
            command,
            expected: N,
            got: args.len(),
        })
    }
}

/// Split a line into a command and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut words = line.split_whitespace();
    let command = Command::from_word(words.next()?);
    let args = words.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}
