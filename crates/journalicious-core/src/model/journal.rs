//! Journal entry model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dal::JournalDao;
use crate::error::{JournalError, Result};

/// ISO-8601 calendar date format used on disk and in input fields.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-8601 `YYYY-MM-DD` date.
///
/// Only the exact zero-padded form is accepted; chrono alone would also take
/// `2024-3-1` or a signed year.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    let invalid = || {
        JournalError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            trimmed
        ))
    };
    if !is_iso_date_shape(trimmed) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| invalid())
}

fn is_iso_date_shape(input: &str) -> bool {
    input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Check that `hour:minute` is a valid wall-clock time.
pub fn validate_time(hour: u32, minute: u32) -> Result<()> {
    if hour > 23 {
        return Err(JournalError::Validation(format!(
            "Hour {} is out of range (0-23)",
            hour
        )));
    }
    if minute > 59 {
        return Err(JournalError::Validation(format!(
            "Minute {} is out of range (0-59)",
            minute
        )));
    }
    Ok(())
}

/// The mutable content of a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalFields {
    pub title: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub context: String,
}

impl JournalFields {
    /// Build fields from raw input, parsing the date and checking the time.
    pub fn new(
        title: impl Into<String>,
        date: &str,
        hour: u32,
        minute: u32,
        context: impl Into<String>,
    ) -> Result<Self> {
        let fields = Self {
            title: title.into(),
            date: parse_date(date)?,
            hour,
            minute,
            context: context.into(),
        };
        fields.validate()?;
        Ok(fields)
    }

    /// Check the invariants that the type alone cannot express.
    pub fn validate(&self) -> Result<()> {
        validate_time(self.hour, self.minute)
    }

    /// Date rendered as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// A saved journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    id: i64,
    #[serde(flatten)]
    fields: JournalFields,
}

impl JournalEntry {
    pub fn new(id: i64, fields: JournalFields) -> Self {
        Self { id, fields }
    }

    /// Store-assigned identity.
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.fields.title
    }

    pub fn date(&self) -> NaiveDate {
        self.fields.date
    }

    pub fn date_string(&self) -> String {
        self.fields.date_string()
    }

    pub fn hour(&self) -> u32 {
        self.fields.hour
    }

    pub fn minute(&self) -> u32 {
        self.fields.minute
    }

    pub fn context(&self) -> &str {
        &self.fields.context
    }

    pub fn fields(&self) -> &JournalFields {
        &self.fields
    }

    /// Time of day as `HH:MM`.
    pub fn time(&self) -> String {
        format!("{:02}:{:02}", self.fields.hour, self.fields.minute)
    }

    /// Case-insensitive substring match against title or context.
    ///
    /// The empty keyword matches every entry.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        let needle = keyword.to_lowercase();
        self.fields.title.to_lowercase().contains(&needle)
            || self.fields.context.to_lowercase().contains(&needle)
    }

    /// Insert a new entry and return it populated with its assigned id.
    pub fn create_journal(dao: &dyn JournalDao, fields: JournalFields) -> Result<JournalEntry> {
        let id = dao.create(&fields)?;
        Ok(Self { id, fields })
    }

    /// Replace this entry's fields in the store, then in memory.
    ///
    /// On failure `self` is left exactly as it was.
    pub fn update_self(&mut self, dao: &dyn JournalDao, fields: JournalFields) -> Result<()> {
        let updated = JournalEntry {
            id: self.id,
            fields,
        };
        dao.update(&updated)?;
        *self = updated;
        Ok(())
    }

    /// Remove this entry from the store. Deleting twice is not an error.
    pub fn delete_self(&self, dao: &dyn JournalDao) -> Result<()> {
        dao.delete(self)
    }

    /// All entries, newest first.
    pub fn get_journals(dao: &dyn JournalDao) -> Result<Vec<JournalEntry>> {
        dao.list_all()
    }

    /// Entries whose title or context contains `keyword`, newest first.
    pub fn get_journals_matching(dao: &dyn JournalDao, keyword: &str) -> Result<Vec<JournalEntry>> {
        dao.list_matching(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: &str, hour: u32, minute: u32) -> JournalEntry {
        JournalEntry::new(id, JournalFields::new("t", date, hour, minute, "c").unwrap())
    }

    #[test]
    fn test_fields_reject_bad_date() {
        let result = JournalFields::new("t", "2024-02-30", 1, 1, "");
        assert!(matches!(result, Err(JournalError::Validation(_))));

        let result = JournalFields::new("t", "11/03/2024", 1, 1, "");
        assert!(matches!(result, Err(JournalError::Validation(_))));
    }

    #[test]
    fn test_parse_date_requires_zero_padded_form() {
        for input in ["2024-3-1", "+2024-03-11", "2024-03-1", "20240311", "2024-03-11x"] {
            assert!(
                matches!(parse_date(input), Err(JournalError::Validation(_))),
                "{} should be rejected",
                input
            );
        }
        let date = parse_date(" 2024-03-01 ").expect("parse should succeed");
        assert_eq!(date.format(DATE_FORMAT).to_string(), "2024-03-01");
    }

    #[test]
    fn test_fields_reject_out_of_range_time() {
        assert!(JournalFields::new("t", "2024-03-11", 24, 0, "").is_err());
        assert!(JournalFields::new("t", "2024-03-11", 0, 60, "").is_err());
        assert!(JournalFields::new("t", "2024-03-11", 23, 59, "").is_ok());
    }

    #[test]
    fn test_time_is_zero_padded() {
        assert_eq!(entry(1, "2024-03-11", 9, 5).time(), "09:05");
    }

    #[test]
    fn test_matches_keyword_is_case_insensitive() {
        let e = JournalEntry::new(
            1,
            JournalFields::new("Monday thoughts", "2024-03-11", 9, 5, "First day").unwrap(),
        );
        assert!(e.matches_keyword("monday"));
        assert!(e.matches_keyword("FIRST"));
        assert!(e.matches_keyword(""));
        assert!(!e.matches_keyword("tuesday"));
    }

    #[test]
    fn test_serializes_flat_with_iso_date() {
        let json = serde_json::to_value(entry(7, "2024-03-11", 9, 5)).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["date"], "2024-03-11");
        assert_eq!(json["hour"], 9);
        assert_eq!(json["title"], "t");
    }
}
