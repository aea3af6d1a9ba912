//! Record model: one contact name and its phone numbers.

use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Phones are kept as raw strings in insertion order. Duplicates are allowed.
/// Deserializing runs every phone through `add_phone`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(try_from = "RecordData")]
pub struct Record {
    /// Name of the contact, also its key in the address book
    name: String,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<String>,
}

/// Unvalidated shape of a serialized record.
#[derive(Deserialize)]
struct RecordData {
    name: String,
    #[serde(default)]
    phones: Vec<String>,
}

impl TryFrom<RecordData> for Record {
    type Error = BookError;

    fn try_from(data: RecordData) -> Result<Self, Self::Error> {
        let mut record = Record::new(data.name);
        for phone in &data.phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }
}

impl Record {
    /// Create a record with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[String] {
        &self.phones
    }

    /// The first phone added to this record, if any.
    pub fn primary_phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` and leaves the phones untouched if the
    /// value is not ten digits.
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone.into_inner());
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let index = self.position(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is stored as given, without the ten-digit check `add_phone` applies.
    // TODO: reject malformed `new` values here as `add_phone` does; until then
    // `Assistant::change_contact` validates before calling this.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let index = self.position(old)?;
        self.phones[index] = new.to_string();
        Ok(())
    }

    /// Return the first stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> BookResult<&str> {
        let index = self.position(phone)?;
        Ok(&self.phones[index])
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones.join("; ")
    }

    fn position(&self, phone: &str) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )
    }
}
