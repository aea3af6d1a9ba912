use address_book_assistant::error::{BookError, BookResult};
use address_book_assistant::models::Record;
use address_book_assistant::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    records: HashMap<String, Record>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without counting it as a call.
    pub fn with_record(mut self, record: Record) -> Self {
        self.records.insert(record.name().to_string(), record);
        self
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.borrow();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.borrow_mut();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn add(&mut self, record: Record) {
        self.track_call("add");
        self.records.insert(record.name().to_string(), record);
    }

    fn get(&self, name: &str) -> BookResult<&Record> {
        self.track_call("get");
        self.records
            .get(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn get_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.track_call("get_mut");
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> BookResult<()> {
        self.track_call("delete");
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    fn list(&self) -> Vec<&Record> {
        self.track_call("list");
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records
    }
}
