//! Directory - in-memory home of every user and book.
//!
//! Records are kept by value, serialized to JSON and keyed `"collection:id"`.
//! Each write bumps a per-record version; each first insert takes the next
//! sequence number so scans come back in sign-up / cataloguing order.
//!
//! ## Example
//!
//! ```
//! use library_desk::{Book, Directory, Record, RecordStore, SequentialIds};
//!
//! let mut directory = Directory::new(Box::new(SequentialIds::new()));
//! let id = directory.fresh_id::<Book>().unwrap();
//! directory.insert_record(&Book::new(id, "Dune", "Sci-Fi", 3)).unwrap();
//!
//! let books = directory.books().unwrap();
//! assert_eq!(books[0].id(), "B1");
//! ```

mod in_memory;
mod store;

use std::fmt;

/// A record together with its write version.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Error type for directory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Serialization/deserialization error.
    Serde(String),
    /// Record not found.
    NotFound { collection: String, id: String },
    /// Insert of an identifier that is already taken.
    DuplicateId { collection: String, id: String },
    /// Update based on a stale read.
    VersionConflict {
        collection: String,
        id: String,
        expected: u64,
        actual: u64,
    },
    /// The generator kept producing identifiers that are already in use.
    IdsExhausted { collection: String, attempts: u32 },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Serde(msg) => write!(f, "record serialization error: {}", msg),
            DirectoryError::NotFound { collection, id } => {
                write!(f, "record not found: {}:{}", collection, id)
            }
            DirectoryError::DuplicateId { collection, id } => {
                write!(f, "identifier already in use: {}:{}", collection, id)
            }
            DirectoryError::VersionConflict {
                collection,
                id,
                expected,
                actual,
            } => write!(
                f,
                "version conflict on {}:{} (expected version {}, actual {})",
                collection, id, expected, actual
            ),
            DirectoryError::IdsExhausted {
                collection,
                attempts,
            } => write!(
                f,
                "no free identifier for {} after {} attempts",
                collection, attempts
            ),
        }
    }
}

impl std::error::Error for DirectoryError {}

pub use in_memory::Directory;
pub use store::RecordStore;
