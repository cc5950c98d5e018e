//! Process-wide session state.
//!
//! One `Session` is built at startup and handed by reference to the
//! navigator and every controller. It owns the authenticated user's models,
//! the journal DAO, and the single-slot navigation history used by Back.

use log::debug;

use crate::dal::JournalDao;
use crate::error::Result;
use crate::model::{Password, UserProfile};
use crate::storage::Storage;
use crate::view::View;

pub struct Session {
    password: Password,
    user: UserProfile,
    journals: Box<dyn JournalDao>,
    previous_view: Option<View>,
}

impl Session {
    pub fn new(password: Password, user: UserProfile, journals: Box<dyn JournalDao>) -> Self {
        Self {
            password,
            user,
            journals,
            previous_view: None,
        }
    }

    /// Load the password and profile from `storage` and wire up its DAOs.
    pub fn start(storage: &Storage) -> Result<Self> {
        let password = Password::load(Box::new(storage.password_dao()))?;
        let user = UserProfile::load(Box::new(storage.user_dao()))?;
        Ok(Self::new(password, user, Box::new(storage.journal_dao())))
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn password_mut(&mut self) -> &mut Password {
        &mut self.password
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut UserProfile {
        &mut self.user
    }

    pub fn journals(&self) -> &dyn JournalDao {
        self.journals.as_ref()
    }

    /// The view Back returns to, if one has been recorded.
    pub fn previous_view(&self) -> Option<View> {
        self.previous_view
    }

    pub fn set_previous_view(&mut self, view: View) {
        debug!(
            "event=previous_view_set module=session view={}",
            view.resource_name()
        );
        self.previous_view = Some(view);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("password", &self.password)
            .field("user", &self.user)
            .field("previous_view", &self.previous_view)
            .finish_non_exhaustive()
    }
}
