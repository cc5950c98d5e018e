//! # Journalicious Core
//!
//! Core library for Journalicious - a single-user, password-protected personal journal.
//!
//! This crate holds the domain logic, persistence, and navigation state machine
//! independent of any front-end. A front-end renders each [`View`], forwards user
//! input to the bound [`Controller`], and hands the events it returns to the
//! [`Navigator`].
//!
//! ## Architecture
//!
//! - **storage**: Entries database and secrets file under one data directory
//! - **dal**: DAO traits and their storage-backed implementations
//! - **model**: Journal entries, the login password, and the user profile
//! - **session**: Process-wide state shared by every controller
//! - **view**: View enumeration and the view-to-controller registry
//! - **navigation**: Transition table and the navigator that applies it
//! - **controllers**: One controller per view

pub mod controllers;
pub mod dal;
pub mod error;
pub mod fs;
pub mod model;
pub mod navigation;
pub mod session;
pub mod storage;
pub mod view;

pub use controllers::Controller;
pub use dal::{JournalDao, PasswordDao, UserDao};
pub use error::{JournalError, Result};
pub use model::{JournalEntry, JournalFields, Password, UserProfile};
pub use navigation::{NavEvent, Navigator};
pub use session::Session;
pub use storage::Storage;
pub use view::{View, ViewRegistry};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
