//! SQLite-backed journal DAO.

use log::{debug, info};
use rusqlite::params;

use crate::error::{JournalError, Result};
use crate::model::{JournalEntry, JournalFields};
use crate::storage::EntriesDb;

use super::row::{JournalRow, JOURNAL_COLUMNS};
use super::JournalDao;

const ORDER_NEWEST_FIRST: &str = "ORDER BY date DESC, hour DESC, minute DESC, id DESC";

#[derive(Debug, Clone)]
pub struct SqliteJournalDao {
    db: EntriesDb,
}

impl SqliteJournalDao {
    pub fn new(db: EntriesDb) -> Self {
        Self { db }
    }
}

impl JournalDao for SqliteJournalDao {
    fn create(&self, fields: &JournalFields) -> Result<i64> {
        fields.validate()?;
        let id = self.db.insert(
            "INSERT INTO journals (title, date, hour, minute, context) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                fields.title,
                fields.date_string(),
                fields.hour,
                fields.minute,
                fields.context
            ],
        )?;
        info!("event=journal_create module=dal status=ok id={}", id);
        Ok(id)
    }

    fn update(&self, entry: &JournalEntry) -> Result<()> {
        let fields = entry.fields();
        fields.validate()?;
        let changed = self.db.execute(
            "UPDATE journals SET title = ?1, date = ?2, hour = ?3, minute = ?4, context = ?5 WHERE id = ?6",
            params![
                fields.title,
                fields.date_string(),
                fields.hour,
                fields.minute,
                fields.context,
                entry.id()
            ],
        )?;
        if changed == 0 {
            return Err(JournalError::NotFound(format!(
                "Journal entry {}",
                entry.id()
            )));
        }
        info!("event=journal_update module=dal status=ok id={}", entry.id());
        Ok(())
    }

    fn delete(&self, entry: &JournalEntry) -> Result<()> {
        let changed = self
            .db
            .execute("DELETE FROM journals WHERE id = ?1", params![entry.id()])?;
        if changed == 0 {
            debug!(
                "event=journal_delete module=dal status=ok id={} already_absent=true",
                entry.id()
            );
        } else {
            info!("event=journal_delete module=dal status=ok id={}", entry.id());
        }
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<JournalEntry>> {
        let sql = format!(
            "SELECT {} FROM journals {}",
            JOURNAL_COLUMNS, ORDER_NEWEST_FIRST
        );
        self.db.query_rows(&sql, [], |row| {
            let raw = JournalRow::from_row(row)?;
            raw.try_into()
        })
    }

    fn list_matching(&self, keyword: &str) -> Result<Vec<JournalEntry>> {
        // SQLite's LIKE only folds ASCII, so matching is done on decoded rows.
        let entries = self.list_all()?;
        Ok(entries
            .into_iter()
            .filter(|entry| entry.matches_keyword(keyword))
            .collect())
    }
}
