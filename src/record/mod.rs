//! Records - the data the directory stores.
//!
//! Two kinds exist: [`User`] accounts and catalogued [`Book`]s. Both are plain
//! values; the [`Directory`](crate::Directory) owns them and everything else
//! refers to them by identifier.

mod book;
mod user;

use serde::{de::DeserializeOwned, Serialize};

pub use book::Book;
pub use user::{Account, AccountStatus, ProfileEdit, Role, User};

/// Trait for types that can be kept in the directory.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection name, used as the storage key prefix ("users", "books").
    const COLLECTION: &'static str;

    /// Leading character of generated identifiers ("U", "B").
    const ID_PREFIX: &'static str;

    /// Returns the unique identifier for this record.
    fn id(&self) -> &str;
}
