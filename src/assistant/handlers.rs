//! Command handlers for the assistant.
//!
//! Each handler returns either a reply string or a `CommandError`. Errors
//! become one of the fixed user messages in `Assistant::handle_line`.

use crate::commands::{parse_input, Command, ParsedInput};
use crate::config::Config;
use crate::domain::PhoneNumber;
use crate::error::{CommandError, CommandResult, NOT_FOUND_MESSAGE};
use crate::models::{AddressBook, Record};
use crate::repositories::ContactRepository;
use tracing::{debug, warn};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Continue(String),
    /// Print the message and stop
    Exit(String),
    /// Nothing to print
    Silent,
}

/// The assistant: a contact store plus the configuration it was started with.
pub struct Assistant<R: ContactRepository = AddressBook> {
    store: R,
    config: Config,
}

impl Assistant<AddressBook> {
    /// Create an assistant backed by an empty address book.
    pub fn new(config: Config) -> Self {
        Self::with_store(AddressBook::new(), config)
    }
}

impl<R: ContactRepository> Assistant<R> {
    pub fn with_store(store: R, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse and run one line of input.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            return Reply::Silent;
        };

        let result = match &input.command {
            Command::Exit => return Reply::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => self.add_contact(&input),
            Command::Change => self.change_contact(&input),
            Command::Phone => self.show_phone(&input),
            Command::All => Ok(self.show_all()),
            Command::Unknown(word) => {
                warn!(command = %word, "Unknown command");
                Ok("Invalid command.".to_string())
            }
        };

        match result {
            Ok(message) => Reply::Continue(message),
            Err(e) => {
                warn!(command = %input.command, error = %e, "Command failed");
                Reply::Continue(e.user_message().to_string())
            }
        }
    }

    /// `add <name> <phone>`: store a fresh record, replacing any record with that name.
    fn add_contact(&mut self, input: &ParsedInput) -> CommandResult<String> {
        let [name, phone] = input.expect_args::<2>("add")?;

        let mut record = Record::new(name);
        record.add_phone(phone)?;
        self.store.add(record);
        debug!(contact = name, phone, "Added contact");
        Ok("Contact added.".to_string())
    }

    /// `change <name> <phone>`: overwrite the primary phone of an existing contact.
    fn change_contact(&mut self, input: &ParsedInput) -> CommandResult<String> {
        let [name, phone] = input.expect_args::<2>("change")?;

        let record = self.store.get_mut(name)?;
        let phone = PhoneNumber::new(phone)?;
        match record.primary_phone().map(str::to_string) {
            Some(old) => record.edit_phone(&old, phone.as_str())?,
            None => record.add_phone(phone.as_str())?,
        }
        debug!(contact = name, phone = %phone, "Changed contact phone");
        Ok("Contact changed.".to_string())
    }

    /// `phone <name>`: show every phone of a contact. Extra arguments are ignored.
    fn show_phone(&self, input: &ParsedInput) -> CommandResult<String> {
        let name = input
            .args
            .first()
            .ok_or(CommandError::MissingName { command: "phone" })?;

        Ok(match self.store.get(name) {
            Ok(record) => format!(
                "The {} phone number is: {}",
                record.name(),
                record.phones_display()
            ),
            Err(_) => NOT_FOUND_MESSAGE.to_string(),
        })
    }

    /// `all`: one `name: phones` line per contact, then a closing line.
    fn show_all(&self) -> String {
        let records = self.store.list();
        if records.is_empty() {
            return "No contacts found.".to_string();
        }
        let mut lines: Vec<String> = records
            .iter()
            .map(|record| format!("{}: {}", record.name(), record.phones_display()))
            .collect();
        lines.push("All contacts printed".to_string());
        lines.join("\n")
    }
}
