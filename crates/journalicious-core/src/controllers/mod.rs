//! Per-view controllers.
//!
//! Controllers are built by the [`crate::view::ViewRegistry`] without touching
//! storage, then initialized against the [`Session`]. They validate input,
//! call into the models, and emit [`crate::navigation::NavEvent`]s for the
//! navigator. Every error a controller returns is also recorded as
//! user-facing feedback readable through its `error()` accessor.

mod change_password;
mod create;
mod home;
mod login;
mod reset_password;
mod search;

use crate::error::{JournalError, Result};
use crate::session::Session;

pub use change_password::ChangePasswordController;
pub use create::{BackRequest, CreateController, EntryForm};
pub use home::HomeController;
pub use login::LoginController;
pub use reset_password::ResetPasswordController;
pub use search::SearchController;

/// Prompt shown when leaving an entry form with unsaved input.
pub const CONFIRM_LEAVE_MESSAGE: &str = "Are you sure? Progress will be lost";

/// The controller bound to the current view.
#[derive(Debug)]
pub enum Controller {
    Login(LoginController),
    Home(HomeController),
    /// Serves both CREATE and EDIT.
    Create(CreateController),
    Search(SearchController),
    ChangePassword(ChangePasswordController),
    ResetPassword(ResetPasswordController),
}

impl Controller {
    /// Run the controller's I/O setup.
    pub fn initialize(&mut self, session: &Session) -> Result<()> {
        match self {
            Controller::Login(c) => c.initialize(session),
            Controller::Home(c) => c.initialize(session),
            Controller::Create(c) => c.initialize(session),
            Controller::Search(c) => c.initialize(session),
            Controller::ChangePassword(c) => c.initialize(session),
            Controller::ResetPassword(c) => c.initialize(session),
        }
    }

    /// Last feedback message recorded by the controller.
    pub fn error(&self) -> Option<&str> {
        match self {
            Controller::Login(c) => c.error(),
            Controller::Home(c) => c.error(),
            Controller::Create(c) => c.error(),
            Controller::Search(c) => c.error(),
            Controller::ChangePassword(c) => c.error(),
            Controller::ResetPassword(c) => c.error(),
        }
    }
}

/// Turn an error into the text shown to the user.
pub fn feedback_message(err: &JournalError) -> String {
    match err {
        JournalError::Validation(msg) | JournalError::Auth(msg) => msg.clone(),
        JournalError::NotFound(_) => "That entry no longer exists.".to_string(),
        JournalError::Storage(msg) => format!("Could not reach your journal: {}", msg),
        JournalError::Navigation(msg) => msg.clone(),
    }
}

/// Record the outcome of `result` in a controller's feedback slot.
fn record<T>(slot: &mut Option<String>, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => *slot = None,
        Err(err) => *slot = Some(feedback_message(err)),
    }
    result
}

#[cfg(test)]
pub(crate) mod testing {
    use tempfile::TempDir;

    use crate::session::Session;
    use crate::storage::Storage;

    /// A session over a fresh data directory. Keep the `TempDir` alive.
    pub(crate) fn fresh_session() -> (TempDir, Storage, Session) {
        let dir = TempDir::new().expect("temp dir should be created");
        let storage = Storage::initialize(dir.path()).expect("storage init should succeed");
        let session = Session::start(&storage).expect("session start should succeed");
        (dir, storage, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_message_keeps_validation_text() {
        let err = JournalError::Validation("Passwords do not match".to_string());
        assert_eq!(feedback_message(&err), "Passwords do not match");
    }

    #[test]
    fn test_feedback_message_hides_not_found_detail() {
        let err = JournalError::NotFound("Journal entry 7".to_string());
        assert_eq!(feedback_message(&err), "That entry no longer exists.");
    }

    #[test]
    fn test_record_sets_and_clears_slot() {
        let mut slot = None;
        let failed: Result<()> = Err(JournalError::Auth("Incorrect password".to_string()));
        assert!(record(&mut slot, failed).is_err());
        assert_eq!(slot.as_deref(), Some("Incorrect password"));

        assert!(record(&mut slot, Ok(())).is_ok());
        assert!(slot.is_none());
    }
}
