use log::{info, warn};

use crate::error::{JournalError, Result};
use crate::navigation::NavEvent;
use crate::session::Session;

use super::record;

/// Forgot-password flow: answer the stored security question.
#[derive(Debug, Default)]
pub struct ResetPasswordController {
    question: String,
    error: Option<String>,
}

impl ResetPasswordController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, session: &Session) -> Result<()> {
        self.question = session.user().security_question().to_string();
        self.error = None;
        Ok(())
    }

    /// The stored question, as shown to the user.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// # Errors
    ///
    /// Returns `JournalError::Auth` for a wrong answer.
    pub fn submit(&mut self, session: &Session, answer: &str) -> Result<NavEvent> {
        let outcome = if session.user().is_correct_security_question_answer(answer) {
            info!("event=security_answer module=controllers status=ok");
            Ok(NavEvent::Answered)
        } else {
            warn!("event=security_answer module=controllers status=error error_code=wrong_answer");
            Err(JournalError::Auth("Incorrect answer".to_string()))
        };
        record(&mut self.error, outcome)
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

    #[test]
    fn test_question_and_answers() {
        let (_dir, _storage, mut session) = fresh_session();
        session.user_mut().set_security_question("Pet name?").unwrap();
        session.user_mut().set_security_question_answer("Fido").unwrap();

        let mut reset = ResetPasswordController::new();
        reset.initialize(&session).expect("initialize should succeed");
        assert_eq!(reset.question(), "Pet name?");

        assert!(matches!(
            reset.submit(&session, "Spot"),
            Err(JournalError::Auth(_))
        ));
        assert_eq!(reset.error(), Some("Incorrect answer"));

        assert_eq!(reset.submit(&session, "Fido").unwrap(), NavEvent::Answered);
        assert!(reset.error().is_none());
    }
}
