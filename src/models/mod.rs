//! Data models for the address book.
//!
//! A `Record` holds one contact's phones; an `AddressBook` holds every
//! record keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
