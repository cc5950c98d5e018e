//! Data access layer.
//!
//! Each trait maps domain operations onto the persistence adapter. Models and
//! controllers depend on the traits only, so tests can swap in fakes and the
//! implementations are free to manage connections as they see fit.

mod journal;
mod password;
mod row;
mod user;

use crate::error::Result;
use crate::model::{JournalEntry, JournalFields};

pub use journal::SqliteJournalDao;
pub use password::FilePasswordDao;
pub use user::FileUserDao;

/// Journal entry persistence.
pub trait JournalDao {
    /// Insert a new entry and return its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if the time is out of range.
    fn create(&self, fields: &JournalFields) -> Result<i64>;

    /// Replace all mutable fields of the entry with the same id.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NotFound` if no entry has that id.
    fn update(&self, entry: &JournalEntry) -> Result<()>;

    /// Remove the entry with the same id. Succeeds if it is already gone.
    fn delete(&self, entry: &JournalEntry) -> Result<()>;

    /// Every entry, newest first (date, hour, minute, then id, all descending).
    fn list_all(&self) -> Result<Vec<JournalEntry>>;

    /// Entries whose title or context contains `keyword`, ignoring case.
    ///
    /// The empty keyword matches every entry. Ordering matches [`JournalDao::list_all`].
    fn list_matching(&self, keyword: &str) -> Result<Vec<JournalEntry>>;
}

/// Login password persistence.
pub trait PasswordDao {
    /// Read the stored password, writing the default first if none is stored.
    fn load(&self) -> Result<String>;

    /// Replace the stored password.
    fn store(&self, value: &str) -> Result<()>;
}

/// User profile persistence.
pub trait UserDao {
    /// Stored security question, or `""` when unset.
    fn load_question(&self) -> Result<String>;

    /// Stored security answer, or `""` when unset.
    fn load_answer(&self) -> Result<String>;

    fn store_question(&self, question: &str) -> Result<()>;

    fn store_answer(&self, answer: &str) -> Result<()>;

    /// Replace the question and the answer together. On error neither changed.
    fn store_profile(&self, question: &str, answer: &str) -> Result<()>;
}
