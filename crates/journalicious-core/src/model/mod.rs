//! Domain models.
//!
//! Models hold values and delegate every write to a DAO. In-memory state is
//! only updated after the DAO reports success.

pub mod journal;
pub mod password;
pub mod user;

pub use journal::{parse_date, validate_time, JournalEntry, JournalFields, DATE_FORMAT};
pub use password::Password;
pub use user::UserProfile;
