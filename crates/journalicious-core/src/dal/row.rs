//! Journal row type for database queries.

use rusqlite::Row;

use crate::error::{JournalError, Result};
use crate::model::{JournalEntry, JournalFields};

/// Column list matching [`JournalRow::from_row`].
pub const JOURNAL_COLUMNS: &str = "id, title, date, hour, minute, context";

/// Raw row data from the journals table, before parsing into domain types.
///
/// Every column except `id` is nullable in the schema.
#[derive(Debug)]
pub struct JournalRow {
    pub id: i64,
    pub title: Option<String>,
    pub date: Option<String>,
    pub hour: Option<i64>,
    pub minute: Option<i64>,
    pub context: Option<String>,
}

impl JournalRow {
    pub fn from_row(row: &Row<'_>) -> Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            date: row.get(2)?,
            hour: row.get(3)?,
            minute: row.get(4)?,
            context: row.get(5)?,
        })
    }
}

fn time_part(id: i64, name: &str, value: Option<i64>) -> Result<u32> {
    let value = value
        .ok_or_else(|| JournalError::Storage(format!("Entry {} has no {}", id, name)))?;
    u32::try_from(value)
        .map_err(|_| JournalError::Storage(format!("Entry {} has invalid {} {}", id, name, value)))
}

impl TryFrom<JournalRow> for JournalEntry {
    type Error = JournalError;

    fn try_from(row: JournalRow) -> Result<Self> {
        let id = row.id;
        let date = row
            .date
            .ok_or_else(|| JournalError::Storage(format!("Entry {} has no date", id)))?;
        let hour = time_part(id, "hour", row.hour)?;
        let minute = time_part(id, "minute", row.minute)?;

        // Invalid persisted state is a storage fault, not a user input problem.
        let fields = JournalFields::new(
            row.title.unwrap_or_default(),
            &date,
            hour,
            minute,
            row.context.unwrap_or_default(),
        )
        .map_err(|err| JournalError::Storage(format!("Entry {} is corrupt: {}", id, err)))?;

        Ok(JournalEntry::new(id, fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: Option<&str>, hour: Option<i64>) -> JournalRow {
        JournalRow {
            id: 3,
            title: None,
            date: date.map(str::to_string),
            hour,
            minute: Some(30),
            context: Some("body".to_string()),
        }
    }

    #[test]
    fn test_valid_row_converts() {
        let entry = JournalEntry::try_from(row(Some("2024-03-11"), Some(10))).unwrap();
        assert_eq!(entry.id(), 3);
        assert_eq!(entry.title(), "");
        assert_eq!(entry.time(), "10:30");
        assert_eq!(entry.context(), "body");
    }

    #[test]
    fn test_corrupt_rows_are_storage_errors() {
        let missing_date = JournalEntry::try_from(row(None, Some(10)));
        assert!(matches!(missing_date, Err(JournalError::Storage(_))));

        let bad_date = JournalEntry::try_from(row(Some("yesterday"), Some(10)));
        assert!(matches!(bad_date, Err(JournalError::Storage(_))));

        let bad_hour = JournalEntry::try_from(row(Some("2024-03-11"), Some(-1)));
        assert!(matches!(bad_hour, Err(JournalError::Storage(_))));

        let late_hour = JournalEntry::try_from(row(Some("2024-03-11"), Some(25)));
        assert!(matches!(late_hour, Err(JournalError::Storage(_))));
    }
}
