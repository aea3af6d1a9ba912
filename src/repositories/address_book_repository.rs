use crate::error::BookResult;
use crate::models::{AddressBook, Record};
use crate::repositories::traits::ContactRepository;

/// The in-memory address book is the only production store.
impl ContactRepository for AddressBook {
    fn add(&mut self, record: Record) {
        self.add_record(record);
    }

    fn get(&self, name: &str) -> BookResult<&Record> {
        self.find(name)
    }

    fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.find_mut(name)
    }

    fn delete(&mut self, name: &str) -> BookResult<()> {
        AddressBook::delete(self, name)
    }

    fn list(&self) -> Vec<&Record> {
        self.records().collect()
    }

    fn contains(&self, name: &str) -> bool {
        AddressBook::contains(self, name)
    }
}
