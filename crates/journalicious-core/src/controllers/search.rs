use crate::error::{JournalError, Result};
use crate::model::JournalEntry;
use crate::navigation::NavEvent;
use crate::session::Session;

use super::record;

/// Keyword search over titles and contexts, with edit and delete of results.
#[derive(Debug, Default)]
pub struct SearchController {
    query: String,
    results: Vec<JournalEntry>,
    error: Option<String>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the empty query, which matches every entry.
    pub fn initialize(&mut self, session: &Session) -> Result<()> {
        self.search(session, "").map(|_| ())
    }

    pub fn search(&mut self, session: &Session, query: &str) -> Result<&[JournalEntry]> {
        let found = record(
            &mut self.error,
            JournalEntry::get_journals_matching(session.journals(), query),
        )?;
        self.query = query.to_string();
        self.results = found;
        Ok(&self.results)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[JournalEntry] {
        &self.results
    }

    /// Open the result at `index` in the editor.
    pub fn edit_entry(&mut self, index: usize) -> Result<NavEvent> {
        let outcome = self.result_at(index).cloned().map(NavEvent::EditEntry);
        record(&mut self.error, outcome)
    }

    /// Delete the result at `index`, then re-run the current query.
    pub fn delete_entry(&mut self, session: &Session, index: usize) -> Result<()> {
        let outcome = self
            .result_at(index)
            .and_then(|entry| entry.delete_self(session.journals()));
        record(&mut self.error, outcome)?;
        let query = self.query.clone();
        self.search(session, &query).map(|_| ())
    }

    pub fn back(&self) -> NavEvent {
        NavEvent::Back
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn result_at(&self, index: usize) -> Result<&JournalEntry> {
        self.results
            .get(index)
            .ok_or_else(|| JournalError::NotFound(format!("Search result {}", index)))
    }
}
