//! Role actions.
//!
//! A capability value is handed out only for a user of the matching variant,
//! so holding an [`Admin`] or [`Librarian`] is proof of the role. Capabilities
//! carry the actor's identifier, not a reference to the record, which keeps
//! the directory free to lend out the target mutably.

mod admin;
mod librarian;

pub use admin::Admin;
pub use librarian::Librarian;
