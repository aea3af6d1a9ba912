//! Address Book Assistant - a command-line assistant that keeps contacts in memory.
//!
//! The assistant reads textual commands (`add`, `change`, `phone`, `all`,
//! `hello`, `close`/`exit`), updates an in-memory address book, and replies
//! with short status messages.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers)
//! - **models**: `Record` and `AddressBook`
//! - **repositories**: The storage seam handlers run against
//! - **commands**: Parsing of input lines into commands
//! - **assistant**: Command handlers and the interactive loop
//! - **error**: Error types and their user-facing messages
//! - **config**: Configuration from environment variables

pub mod assistant;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use assistant::{Assistant, Reply};
pub use commands::{parse_input, Command, ParsedInput};
pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use repositories::ContactRepository;
