//! Library desk - a console library-management demo.
//!
//! People sign up as an administrator, a librarian or a regular patron, log
//! in, and work through numbered text menus: administrators moderate
//! accounts, librarians catalogue books, everyone can edit their own profile.
//! Everything lives in memory for one run.
//!
//! ## Layout
//!
//! - [`record`]: users (tagged by role) and books
//! - [`directory`]: the in-memory store that owns every record
//! - [`roles`]: administrator and librarian capabilities
//! - [`access`]: sign-up and login, free of console I/O
//! - [`session`]: the menu controller driving a reader/writer pair

pub mod access;
pub mod config;
pub mod directory;
mod error;
pub mod id;
pub mod record;
pub mod roles;
pub mod session;

pub use access::{log_in, sign_up, LoginError, NewAccount};
pub use config::{Cli, SessionConfig};
pub use directory::{Directory, DirectoryError, RecordStore, Versioned};
pub use error::SessionError;
pub use id::{IdGenerator, RandomIds, SequentialIds};
pub use record::{Account, AccountStatus, Book, ProfileEdit, Record, Role, User};
pub use roles::{Admin, Librarian};
pub use session::Session;
