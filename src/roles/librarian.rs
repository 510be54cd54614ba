use crate::record::{Book, User};

/// Cataloguing rights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Librarian {
    id: String,
}

impl Librarian {
    /// Cataloguing rights of `user`, if they are a librarian.
    pub fn of(user: &User) -> Option<Self> {
        match user {
            User::Librarian(account) => Some(Self {
                id: account.id.clone(),
            }),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Builds the book; storing it is up to the caller.
    pub fn add_book(&self, id: String, title: &str, genre: &str, copies: i32) -> Book {
        tracing::info!(librarian = %self.id, book = %id, title, "book created");
        Book::new(id, title, genre, copies)
    }
}
