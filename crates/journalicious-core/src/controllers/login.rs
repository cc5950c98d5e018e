use log::{info, warn};

use crate::error::{JournalError, Result};
use crate::navigation::NavEvent;
use crate::session::Session;

use super::record;

#[derive(Debug, Default)]
pub struct LoginController {
    error: Option<String>,
}

impl LoginController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, _session: &Session) -> Result<()> {
        self.error = None;
        Ok(())
    }

    /// Check the entered password.
    ///
    /// A correct password leads HOME, or to CHANGE_PASSWORD while the
    /// default password is still in place.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Auth` for an incorrect password.
    pub fn submit(&mut self, session: &Session, entered: &str) -> Result<NavEvent> {
        let password = session.password();
        let outcome = if !password.is_correct_password(entered) {
            warn!("event=login module=controllers status=error error_code=wrong_password");
            Err(JournalError::Auth("Incorrect password".to_string()))
        } else if password.is_first_time_user() {
            info!("event=login module=controllers status=ok first_time=true");
            Ok(NavEvent::FirstTime)
        } else {
            info!("event=login module=controllers status=ok");
            Ok(NavEvent::LoginOk)
        };
        record(&mut self.error, outcome)
    }

    /// Start password recovery. Refused while no security question is set.
    pub fn forgot_password(&mut self, session: &Session) -> Result<NavEvent> {
        let outcome = if session.user().has_security_question() {
            Ok(NavEvent::ForgotPassword)
        } else {
            Err(JournalError::Validation(
                "No security question has been set".to_string(),
            ))
        };
        record(&mut self.error, outcome)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::testing::fresh_session;

    #[test]
    fn test_default_password_is_first_time() {
        let (_dir, _storage, session) = fresh_session();
        let mut login = LoginController::new();

        let event = login.submit(&session, "p").expect("login should succeed");
        assert_eq!(event, NavEvent::FirstTime);
        assert!(login.error().is_none());
    }

    #[test]
    fn test_wrong_password_records_error() {
        let (_dir, _storage, session) = fresh_session();
        let mut login = LoginController::new();

        let result = login.submit(&session, "nope");
        assert!(matches!(result, Err(JournalError::Auth(_))));
        assert_eq!(login.error(), Some("Incorrect password"));
    }

    #[test]
    fn test_changed_password_logs_in() {
        let (_dir, _storage, mut session) = fresh_session();
        session
            .password_mut()
            .set_password("alpha")
            .expect("set password should succeed");
        let mut login = LoginController::new();

        assert_eq!(login.submit(&session, "alpha").unwrap(), NavEvent::LoginOk);
        assert!(login.submit(&session, "p").is_err());
    }

    #[test]
    fn test_forgot_password_requires_question() {
        let (_dir, _storage, mut session) = fresh_session();
        let mut login = LoginController::new();
        assert!(matches!(
            login.forgot_password(&session),
            Err(JournalError::Validation(_))
        ));

        session.user_mut().set_security_question("Pet name?").unwrap();
        session.user_mut().set_security_question_answer("Fido").unwrap();
        assert_eq!(
            login.forgot_password(&session).unwrap(),
            NavEvent::ForgotPassword
        );
    }
}
