use crate::error::BookResult;
use crate::models::Record;

/// Repository for managing contact records.
///
/// Provides abstraction over record storage so that command handlers can
/// run against the in-memory `AddressBook` or a test double.
pub trait ContactRepository {
    /// Store a record under its name, replacing any existing one.
    fn add(&mut self, record: Record);

    /// Retrieve a record by name.
    fn get(&self, name: &str) -> BookResult<&Record>;

    /// Retrieve a record by name for in-place mutation.
    fn get_mut(&mut self, name: &str) -> BookResult<&mut Record>;

    /// Delete the record stored under `name`.
    fn delete(&mut self, name: &str) -> BookResult<()>;

    /// All records, ordered by name.
    fn list(&self) -> Vec<&Record>;

    /// Whether a record exists under `name`.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }
}
