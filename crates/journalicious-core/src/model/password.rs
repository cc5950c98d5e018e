//! Login password model.

use std::fmt;

use log::info;
use secrecy::{ExposeSecret, SecretString};

use crate::dal::PasswordDao;
use crate::error::Result;
use crate::storage::secrets::DEFAULT_PASSWORD_VALUE;

/// The stored login password plus the DAO it writes through.
pub struct Password {
    value: SecretString,
    dao: Box<dyn PasswordDao>,
}

impl Password {
    /// Sentinel stored until the user picks a password.
    pub const DEFAULT_VALUE: &'static str = DEFAULT_PASSWORD_VALUE;

    /// Read the stored password through `dao`.
    pub fn load(dao: Box<dyn PasswordDao>) -> Result<Self> {
        let value = dao.load()?;
        Ok(Self {
            value: SecretString::from(value),
            dao,
        })
    }

    /// Persist a new password, then adopt it in memory.
    pub fn set_password(&mut self, new_password: &str) -> Result<()> {
        self.dao.store(new_password)?;
        self.value = SecretString::from(new_password.to_string());
        info!("event=password_changed module=model status=ok");
        Ok(())
    }

    /// A first-time user still has the default password.
    pub fn is_first_time_user(&self) -> bool {
        self.value.expose_secret() == Self::DEFAULT_VALUE
    }

    pub fn is_correct_password(&self, entered: &str) -> bool {
        self.value.expose_secret() == entered
    }

    /// Whether `new_password` may replace the current one.
    pub fn is_valid_new_password(new_password: &str) -> bool {
        new_password != Self::DEFAULT_VALUE
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("value", &"[REDACTED]")
            .field("first_time", &self.is_first_time_user())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct MemoryPasswordDao {
        stored: Rc<RefCell<String>>,
        fail_writes: bool,
    }

    impl PasswordDao for MemoryPasswordDao {
        fn load(&self) -> Result<String> {
            Ok(self.stored.borrow().clone())
        }

        fn store(&self, value: &str) -> Result<()> {
            if self.fail_writes {
                return Err(JournalError::Storage("disk full".to_string()));
            }
            *self.stored.borrow_mut() = value.to_string();
            Ok(())
        }
    }

    fn password(initial: &str, fail_writes: bool) -> (Password, Rc<RefCell<String>>) {
        let stored = Rc::new(RefCell::new(initial.to_string()));
        let dao = MemoryPasswordDao {
            stored: Rc::clone(&stored),
            fail_writes,
        };
        (Password::load(Box::new(dao)).unwrap(), stored)
    }

    #[test]
    fn test_default_is_first_time_user() {
        let (pw, _) = password("p", false);
        assert!(pw.is_first_time_user());
        assert!(pw.is_correct_password("p"));
    }

    #[test]
    fn test_set_password_writes_through() {
        let (mut pw, stored) = password("p", false);
        pw.set_password("alpha").unwrap();

        assert_eq!(*stored.borrow(), "alpha");
        assert!(pw.is_correct_password("alpha"));
        assert!(!pw.is_correct_password("p"));
        assert!(!pw.is_first_time_user());
    }

    #[test]
    fn test_failed_store_leaves_value_unchanged() {
        let (mut pw, _) = password("alpha", true);
        let result = pw.set_password("beta");

        assert!(matches!(result, Err(JournalError::Storage(_))));
        assert!(pw.is_correct_password("alpha"));
    }

    #[test]
    fn test_is_valid_new_password() {
        assert!(!Password::is_valid_new_password("p"));
        assert!(Password::is_valid_new_password("alpha"));
    }

    #[test]
    fn test_debug_redacts_value() {
        let (pw, _) = password("hunter2", false);
        let debug = format!("{:?}", pw);
        assert!(!debug.contains("hunter2"));
    }
}
