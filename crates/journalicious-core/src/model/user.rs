//! User profile model: the security question used to recover a password.

use std::fmt;

use log::info;
use secrecy::{ExposeSecret, SecretString};

use crate::dal::UserDao;
use crate::error::Result;

pub struct UserProfile {
    security_question: String,
    security_question_answer: SecretString,
    dao: Box<dyn UserDao>,
}

impl UserProfile {
    /// Read the stored question and answer through `dao`.
    pub fn load(dao: Box<dyn UserDao>) -> Result<Self> {
        let security_question = dao.load_question()?;
        let answer = dao.load_answer()?;
        Ok(Self {
            security_question,
            security_question_answer: SecretString::from(answer),
            dao,
        })
    }

    pub fn security_question(&self) -> &str {
        &self.security_question
    }

    /// Whether a usable question and answer have been recorded.
    pub fn has_security_question(&self) -> bool {
        !self.security_question.trim().is_empty()
            && !self.security_question_answer.expose_secret().is_empty()
    }

    pub fn set_security_question(&mut self, question: &str) -> Result<()> {
        self.dao.store_question(question)?;
        self.security_question = question.to_string();
        info!("event=security_question_changed module=model status=ok");
        Ok(())
    }

    pub fn set_security_question_answer(&mut self, answer: &str) -> Result<()> {
        self.dao.store_answer(answer)?;
        self.security_question_answer = SecretString::from(answer.to_string());
        info!("event=security_answer_changed module=model status=ok");
        Ok(())
    }

    /// Replace the question and the answer in one write. Both in-memory
    /// fields change only after the store accepted both.
    pub fn set_security_profile(&mut self, question: &str, answer: &str) -> Result<()> {
        self.dao.store_profile(question, answer)?;
        self.security_question = question.to_string();
        self.security_question_answer = SecretString::from(answer.to_string());
        info!("event=security_profile_changed module=model status=ok");
        Ok(())
    }

    /// Exact comparison; an unset answer never matches.
    pub fn is_correct_security_question_answer(&self, entered: &str) -> bool {
        let stored = self.security_question_answer.expose_secret();
        !stored.is_empty() && stored == entered
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("security_question", &self.security_question)
            .field("security_question_answer", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Stored {
        question: String,
        answer: String,
    }

    struct MemoryUserDao {
        stored: Rc<RefCell<Stored>>,
        fail_writes: bool,
    }

    impl UserDao for MemoryUserDao {
        fn load_question(&self) -> Result<String> {
            Ok(self.stored.borrow().question.clone())
        }

        fn load_answer(&self) -> Result<String> {
            Ok(self.stored.borrow().answer.clone())
        }

        fn store_question(&self, question: &str) -> Result<()> {
            if self.fail_writes {
                return Err(JournalError::Storage("read-only".to_string()));
            }
            self.stored.borrow_mut().question = question.to_string();
            Ok(())
        }

        fn store_answer(&self, answer: &str) -> Result<()> {
            if self.fail_writes {
                return Err(JournalError::Storage("read-only".to_string()));
            }
            self.stored.borrow_mut().answer = answer.to_string();
            Ok(())
        }

        fn store_profile(&self, question: &str, answer: &str) -> Result<()> {
            if self.fail_writes {
                return Err(JournalError::Storage("read-only".to_string()));
            }
            let mut stored = self.stored.borrow_mut();
            stored.question = question.to_string();
            stored.answer = answer.to_string();
            Ok(())
        }
    }

    fn profile(fail_writes: bool) -> (UserProfile, Rc<RefCell<Stored>>) {
        profile_with(Stored::default(), fail_writes)
    }

    fn profile_with(initial: Stored, fail_writes: bool) -> (UserProfile, Rc<RefCell<Stored>>) {
        let stored = Rc::new(RefCell::new(initial));
        let dao = MemoryUserDao {
            stored: Rc::clone(&stored),
            fail_writes,
        };
        (UserProfile::load(Box::new(dao)).unwrap(), stored)
    }

    #[test]
    fn test_unset_profile() {
        let (user, _) = profile(false);
        assert_eq!(user.security_question(), "");
        assert!(!user.has_security_question());
        assert!(!user.is_correct_security_question_answer(""));
    }

    #[test]
    fn test_setters_write_through() {
        let (mut user, stored) = profile(false);
        user.set_security_question("Pet name?").unwrap();
        user.set_security_question_answer("Fido").unwrap();

        assert_eq!(stored.borrow().question, "Pet name?");
        assert_eq!(stored.borrow().answer, "Fido");
        assert!(user.has_security_question());
    }

    #[test]
    fn test_answer_comparison_is_exact() {
        let (mut user, _) = profile(false);
        user.set_security_question_answer("Fido").unwrap();

        assert!(user.is_correct_security_question_answer("Fido"));
        assert!(!user.is_correct_security_question_answer("fido"));
        assert!(!user.is_correct_security_question_answer("Fido "));
    }

    #[test]
    fn test_security_profile_replaces_both() {
        let (mut user, stored) = profile(false);
        user.set_security_profile("Pet name?", "Fido")
            .expect("set_security_profile should succeed");

        assert_eq!(stored.borrow().question, "Pet name?");
        assert_eq!(stored.borrow().answer, "Fido");
        assert_eq!(user.security_question(), "Pet name?");
        assert!(user.is_correct_security_question_answer("Fido"));
    }

    #[test]
    fn test_failed_profile_write_keeps_old_pair() {
        let initial = Stored {
            question: "Pet name?".to_string(),
            answer: "Fido".to_string(),
        };
        let (mut user, stored) = profile_with(initial, true);

        assert!(user
            .set_security_profile("Mother's maiden name?", "Smith")
            .is_err());

        assert_eq!(user.security_question(), "Pet name?");
        assert!(user.is_correct_security_question_answer("Fido"));
        assert_eq!(stored.borrow().question, "Pet name?");
        assert_eq!(stored.borrow().answer, "Fido");
    }

    #[test]
    fn test_failed_write_leaves_state_unchanged() {
        let (mut user, _) = profile(true);
        assert!(user.set_security_question("Pet name?").is_err());
        assert_eq!(user.security_question(), "");
    }
}
