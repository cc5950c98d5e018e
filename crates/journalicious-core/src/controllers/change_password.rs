use crate::error::{JournalError, Result};
use crate::model::Password;
use crate::navigation::NavEvent;
use crate::session::Session;

use super::record;

#[derive(Debug, Default)]
pub struct ChangePasswordController {
    needs_security_question: bool,
    error: Option<String>,
}

impl ChangePasswordController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, session: &Session) -> Result<()> {
        self.needs_security_question = !session.user().has_security_question();
        self.error = None;
        Ok(())
    }

    /// Replace the password with `new_password`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if the password is empty, equals
    /// the default, or differs from `confirmation`.
    pub fn submit(
        &mut self,
        session: &mut Session,
        new_password: &str,
        confirmation: &str,
    ) -> Result<NavEvent> {
        let outcome = Self::check(new_password, confirmation)
            .and_then(|()| session.password_mut().set_password(new_password))
            .map(|()| NavEvent::PasswordChanged);
        record(&mut self.error, outcome)
    }

    fn check(new_password: &str, confirmation: &str) -> Result<()> {
        if new_password.is_empty() {
            return Err(JournalError::Validation(
                "Password cannot be empty".to_string(),
            ));
        }
        if !Password::is_valid_new_password(new_password) {
            return Err(JournalError::Validation(
                "Choose a password other than the default".to_string(),
            ));
        }
        if new_password != confirmation {
            return Err(JournalError::Validation(
                "Passwords do not match".to_string(),
            ));
        }
        Ok(())
    }

    /// No usable security question was stored when the view opened.
    pub fn needs_security_question(&self) -> bool {
        self.needs_security_question
    }

    /// Record the question and answer used by forgot-password.
    pub fn set_security_question(
        &mut self,
        session: &mut Session,
        question: &str,
        answer: &str,
    ) -> Result<()> {
        let outcome = if question.trim().is_empty() || answer.trim().is_empty() {
            Err(JournalError::Validation(
                "Both a question and an answer are required".to_string(),
            ))
        } else {
            session.user_mut().set_security_profile(question, answer)
        };
        record(&mut self.error, outcome)?;
        self.needs_security_question = false;
        Ok(())
    }

    pub fn back(&self) -> NavEvent {
        NavEvent::Back
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testing::fresh_session;
    use crate::dal::UserDao;
    use crate::model::UserProfile;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Profile store that accepts question writes but rejects answer writes.
    struct AnswerRejectingDao {
        stored: Rc<RefCell<(String, String)>>,
    }

    impl UserDao for AnswerRejectingDao {
        fn load_question(&self) -> Result<String> {
            Ok(self.stored.borrow().0.clone())
        }

        fn load_answer(&self) -> Result<String> {
            Ok(self.stored.borrow().1.clone())
        }

        fn store_question(&self, question: &str) -> Result<()> {
            self.stored.borrow_mut().0 = question.to_string();
            Ok(())
        }

        fn store_answer(&self, _answer: &str) -> Result<()> {
            Err(JournalError::Storage("disk full".to_string()))
        }

        fn store_profile(&self, question: &str, answer: &str) -> Result<()> {
            self.store_answer(answer)?;
            self.store_question(question)
        }
    }

    #[test]
    fn test_rejections_in_order() {
        let (_dir, _storage, mut session) = fresh_session();
        let mut change = ChangePasswordController::new();
        change.initialize(&session).unwrap();

        assert!(change.submit(&mut session, "", "").is_err());
        assert_eq!(change.error(), Some("Password cannot be empty"));

        assert!(change.submit(&mut session, "p", "p").is_err());
        assert_eq!(change.error(), Some("Choose a password other than the default"));

        assert!(change.submit(&mut session, "alpha", "alpah").is_err());
        assert_eq!(change.error(), Some("Passwords do not match"));

        assert!(session.password().is_first_time_user());
    }

    #[test]
    fn test_submit_writes_through() {
        let (_dir, storage, mut session) = fresh_session();
        let mut change = ChangePasswordController::new();
        change.initialize(&session).unwrap();

        let event = change
            .submit(&mut session, "alpha", "alpha")
            .expect("submit should succeed");
        assert_eq!(event, NavEvent::PasswordChanged);
        assert!(change.error().is_none());

        let reloaded = Password::load(Box::new(storage.password_dao())).unwrap();
        assert!(reloaded.is_correct_password("alpha"));
    }

    #[test]
    fn test_security_question_setup() {
        let (_dir, _storage, mut session) = fresh_session();
        let mut change = ChangePasswordController::new();
        change.initialize(&session).unwrap();
        assert!(change.needs_security_question());

        assert!(change
            .set_security_question(&mut session, "Pet name?", " ")
            .is_err());
        change
            .set_security_question(&mut session, "Pet name?", "Fido")
            .expect("set question should succeed");

        assert!(!change.needs_security_question());
        assert!(session.user().is_correct_security_question_answer("Fido"));
    }

    #[test]
    fn test_failed_security_question_write_keeps_old_pair() {
        let (_dir, storage, _) = fresh_session();
        let stored = Rc::new(RefCell::new(("Pet name?".to_string(), "Fido".to_string())));
        let user = UserProfile::load(Box::new(AnswerRejectingDao {
            stored: Rc::clone(&stored),
        }))
        .expect("profile load should succeed");
        let password = Password::load(Box::new(storage.password_dao()))
            .expect("password load should succeed");
        let mut session = Session::new(password, user, Box::new(storage.journal_dao()));

        let mut change = ChangePasswordController::new();
        change.initialize(&session).unwrap();
        let result = change.set_security_question(&mut session, "Mother's maiden name?", "Smith");

        assert!(matches!(result, Err(JournalError::Storage(_))));
        assert!(change.error().is_some());
        assert_eq!(session.user().security_question(), "Pet name?");
        assert!(session.user().is_correct_security_question_answer("Fido"));
        assert_eq!(
            *stored.borrow(),
            ("Pet name?".to_string(), "Fido".to_string())
        );
    }
}
