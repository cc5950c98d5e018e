use crate::error::Result;
use crate::model::JournalEntry;
use crate::navigation::NavEvent;
use crate::session::Session;

use super::record;

/// Landing view after login: the entry list plus the main actions.
#[derive(Debug, Default)]
pub struct HomeController {
    entries: Vec<JournalEntry>,
    error: Option<String>,
}

impl HomeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, session: &Session) -> Result<()> {
        self.refresh(session)
    }

    /// Reload every entry, newest first.
    pub fn refresh(&mut self, session: &Session) -> Result<()> {
        let loaded = record(
            &mut self.error,
            JournalEntry::get_journals(session.journals()),
        )?;
        self.entries = loaded;
        Ok(())
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn new_entry(&self) -> NavEvent {
        NavEvent::NewEntry
    }

    pub fn search(&self) -> NavEvent {
        NavEvent::Search
    }

    pub fn change_password(&self) -> NavEvent {
        NavEvent::ChangePassword
    }

    pub fn logout(&self) -> NavEvent {
        NavEvent::Logout
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
