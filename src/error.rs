use std::fmt;
use std::io;

use crate::directory::DirectoryError;

/// Errors that end a console session.
#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    Directory(DirectoryError),
    /// Input stream reached end of file.
    InputClosed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "console I/O error: {}", err),
            SessionError::Directory(err) => write!(f, "directory error: {}", err),
            SessionError::InputClosed => write!(f, "console input closed"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io(err) => Some(err),
            SessionError::Directory(err) => Some(err),
            SessionError::InputClosed => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

impl From<DirectoryError> for SessionError {
    fn from(err: DirectoryError) -> Self {
        SessionError::Directory(err)
    }
}
