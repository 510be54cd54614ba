use std::fmt;

use serde::{Deserialize, Serialize};

use super::Record;

/// A catalogued title. Copies are stored as given, zero or negative included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: String,
    title: String,
    genre: String,
    copies: i32,
}

impl Book {
    pub fn new(id: impl Into<String>, title: &str, genre: &str, copies: i32) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            genre: genre.to_string(),
            copies,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn copies(&self) -> i32 {
        self.copies
    }
}

impl Record for Book {
    const COLLECTION: &'static str = "books";
    const ID_PREFIX: &'static str = "B";

    fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Book ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Genre: {}", self.genre)?;
        write!(f, "Copies: {}", self.copies)
    }
}
