//! Entry form for both new entries and edits.
//!
//! The controller starts in create mode with the current date and time. The
//! navigator switches it to edit mode with [`CreateController::initialize_old_journal`]
//! when it is entered from a search result; save then updates instead of inserting.

use chrono::{Local, NaiveDateTime, Timelike};
use log::info;

use crate::error::{JournalError, Result};
use crate::model::{validate_time, JournalEntry, JournalFields, DATE_FORMAT};
use crate::navigation::NavEvent;
use crate::session::Session;

use super::{record, CONFIRM_LEAVE_MESSAGE};

/// Raw form input. The date stays text until save so bad input can be reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
    pub title: String,
    pub date: String,
    pub hour: u32,
    pub minute: u32,
    pub context: String,
}

impl EntryForm {
    /// An empty form stamped with `now`.
    pub fn blank_at(now: NaiveDateTime) -> Self {
        Self {
            title: String::new(),
            date: now.date().format(DATE_FORMAT).to_string(),
            hour: now.hour(),
            minute: now.minute(),
            context: String::new(),
        }
    }

    pub fn from_entry(entry: &JournalEntry) -> Self {
        Self {
            title: entry.title().to_string(),
            date: entry.date_string(),
            hour: entry.hour(),
            minute: entry.minute(),
            context: entry.context().to_string(),
        }
    }

    /// Unsaved input that leaving would discard.
    pub fn is_dirty(&self) -> bool {
        !self.title.is_empty() || !self.context.is_empty()
    }

    /// Validate the form into storable fields.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` for a blank title, a bad date, or
    /// an out-of-range time.
    pub fn to_fields(&self) -> Result<JournalFields> {
        if self.title.trim().is_empty() {
            return Err(JournalError::Validation("Title is required".to_string()));
        }
        JournalFields::new(
            self.title.clone(),
            &self.date,
            self.hour,
            self.minute,
            self.context.clone(),
        )
    }
}

/// What the front-end should do after the user asks to go back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackRequest {
    /// Nothing to lose; emit the event.
    Leave(NavEvent),
    /// Ask the user this question, then call [`CreateController::confirm_back`].
    Confirm(&'static str),
}

#[derive(Debug, Default)]
pub struct CreateController {
    form: EntryForm,
    editing: Option<JournalEntry>,
    saved: Option<JournalEntry>,
    error: Option<String>,
}

impl CreateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initialize(&mut self, _session: &Session) -> Result<()> {
        self.initialize_at(Local::now().naive_local());
        Ok(())
    }

    /// Reset to a blank create-mode form dated `now`.
    pub fn initialize_at(&mut self, now: NaiveDateTime) {
        self.form = EntryForm::blank_at(now);
        self.editing = None;
        self.saved = None;
        self.error = None;
    }

    /// Switch to edit mode, pre-populating every field from `entry`.
    pub fn initialize_old_journal(&mut self, entry: JournalEntry) {
        self.form = EntryForm::from_entry(&entry);
        self.editing = Some(entry);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Entry being edited, if in edit mode.
    pub fn editing(&self) -> Option<&JournalEntry> {
        self.editing.as_ref()
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.form.context = context.into();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.form.date = date.into();
    }

    /// Set the time, rejecting values outside 00:00-23:59.
    pub fn set_time(&mut self, hour: u32, minute: u32) -> Result<()> {
        record(&mut self.error, validate_time(hour, minute))?;
        self.form.hour = hour;
        self.form.minute = minute;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.form.is_dirty()
    }

    pub fn back(&self) -> BackRequest {
        if self.is_dirty() {
            BackRequest::Confirm(CONFIRM_LEAVE_MESSAGE)
        } else {
            BackRequest::Leave(NavEvent::Back)
        }
    }

    /// Answer to the leave confirmation. Cancelling keeps the form as is.
    pub fn confirm_back(&self, confirmed: bool) -> Option<NavEvent> {
        confirmed.then_some(NavEvent::Back)
    }

    /// Insert or update the entry, depending on the mode.
    ///
    /// On failure nothing is persisted and the form keeps its input.
    pub fn save(&mut self, session: &Session) -> Result<NavEvent> {
        let outcome = self.persist(session);
        record(&mut self.error, outcome)?;
        Ok(NavEvent::Save)
    }

    fn persist(&mut self, session: &Session) -> Result<()> {
        let fields = self.form.to_fields()?;
        let dao = session.journals();
        let saved = match self.editing.as_mut() {
            Some(entry) => {
                entry.update_self(dao, fields)?;
                entry.clone()
            }
            None => JournalEntry::create_journal(dao, fields)?,
        };
        info!(
            "event=entry_saved module=controllers status=ok id={} editing={}",
            saved.id(),
            self.editing.is_some()
        );
        self.saved = Some(saved);
        Ok(())
    }

    /// Entry written by the last successful save.
    pub fn saved(&self) -> Option<&JournalEntry> {
        self.saved.as_ref()
    }

    pub fn success_message(&self) -> Option<String> {
        self.saved
            .as_ref()
            .map(|entry| format!("Saved \"{}\"", entry.title()))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
