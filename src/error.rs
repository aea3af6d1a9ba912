//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The data model only signals failures; `CommandError::user_message` is the single
//! place where they are turned into text for the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Reply for wrong argument counts and rejected phone values.
pub const ARGUMENTS_MESSAGE: &str =
    "Please try again and add all nessesary arguments, or delete extra arguments.";

/// Reply for commands that name a contact that does not exist.
pub const INVALID_NAME_MESSAGE: &str = "Invalid contact name. Please try again.";

/// Reply for lookups that found nothing.
pub const NOT_FOUND_MESSAGE: &str = "Contact not found.";

/// Errors raised by the address book and its records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No record is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record has no phone equal to this value
    #[error("Phone not found: {0}")]
    PhoneNotFound(String),

    /// A phone value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised while dispatching a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("{command} expects {expected} argument(s), got {got}")]
    InvalidArguments {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// A lookup command was given no contact name
    #[error("{command} needs a contact name")]
    MissingName { command: &'static str },

    /// The underlying book operation failed
    #[error(transparent)]
    Book(#[from] BookError),
}

impl CommandError {
    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidArguments { .. } | Self::Book(BookError::Validation(_)) => {
                ARGUMENTS_MESSAGE
            }
            Self::Book(BookError::ContactNotFound(_)) => INVALID_NAME_MESSAGE,
            Self::MissingName { .. } | Self::Book(BookError::PhoneNotFound(_)) => {
                NOT_FOUND_MESSAGE
            }
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
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
