//! RecordStore - typed access to the directory's users and books.

use super::{DirectoryError, Versioned};
use crate::record::Record;

/// Keyed storage for users and books. Every scan yields records in the order
/// they first entered the store: sign-up order for users, cataloguing order
/// for books.
pub trait RecordStore {
    /// Looks up `id` in `R`'s collection.
    fn get_record<R: Record>(&self, id: &str) -> Result<Option<Versioned<R>>, DirectoryError>;

    /// Writes `record` unconditionally. An existing record keeps its place in
    /// scan order and gets the next version.
    fn save_record<R: Record>(&mut self, record: &R) -> Result<Versioned<R>, DirectoryError>;

    /// Adds a record at version 1. A taken identifier is
    /// [`DirectoryError::DuplicateId`].
    fn insert_record<R: Record>(&mut self, record: &R) -> Result<Versioned<R>, DirectoryError>;

    /// Replaces a record read at `expected_version`. If it changed since,
    /// nothing is written and the result is [`DirectoryError::VersionConflict`].
    fn update_record<R: Record>(
        &mut self,
        record: &R,
        expected_version: u64,
    ) -> Result<Versioned<R>, DirectoryError>;

    fn find_records<R: Record>(
        &self,
        predicate: &dyn Fn(&R) -> bool,
    ) -> Result<Vec<Versioned<R>>, DirectoryError>;

    fn contains<R: Record>(&self, id: &str) -> bool;

    /// Earliest-entered match, e.g. the account a login checks when emails
    /// repeat.
    fn find_first<R: Record>(
        &self,
        predicate: &dyn Fn(&R) -> bool,
    ) -> Result<Option<Versioned<R>>, DirectoryError> {
        Ok(self.find_records(predicate)?.into_iter().next())
    }
}
