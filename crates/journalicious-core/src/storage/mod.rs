//! Persistence adapter.
//!
//! Two namespaces live under one application-private data directory:
//!
//! - `journals.db`: relational store for journal entries ([`EntriesDb`])
//! - `secrets.txt`: key-value store for the password and user profile ([`SecretsFile`])
//!
//! The rest of the crate reaches storage only through the DAL in [`crate::dal`].

pub mod secrets;
pub mod sqlite;

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::dal::{FilePasswordDao, FileUserDao, SqliteJournalDao};
use crate::error::{JournalError, Result};

pub use secrets::{SecretsDocument, SecretsFile};
pub use sqlite::EntriesDb;

/// File name of the entries database inside the data directory.
pub const JOURNALS_DB_FILE: &str = "journals.db";

/// File name of the secrets store inside the data directory.
pub const SECRETS_FILE: &str = "secrets.txt";

/// Both stores rooted at one data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
    entries: EntriesDb,
    secrets: SecretsFile,
}

impl Storage {
    /// Prepare the data directory for use.
    ///
    /// Creates the directory, the entries database and its schema, and any
    /// missing required secrets keys. Existing data is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` if either store is unreadable or
    /// unwritable. Callers treat this as fatal at startup.
    pub fn initialize(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir).map_err(|err| {
            error!(
                "event=storage_init module=storage status=error error_code=mkdir_failed error={}",
                err
            );
            JournalError::Storage(format!(
                "Failed to create data directory {}: {}",
                data_dir.display(),
                err
            ))
        })?;

        let entries = EntriesDb::initialize(&data_dir.join(JOURNALS_DB_FILE))?;
        let secrets = SecretsFile::new(&data_dir.join(SECRETS_FILE));
        secrets.ensure_keys(&secrets::REQUIRED_KEYS)?;

        info!(
            "event=storage_init module=storage status=ok data_dir={}",
            data_dir.display()
        );
        Ok(Self {
            root: data_dir.to_path_buf(),
            entries,
            secrets,
        })
    }

    /// Attach to a data directory prepared earlier, changing nothing on disk.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NotFound` if the directory or the entries
    /// database is missing.
    pub fn open(data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            return Err(JournalError::NotFound(format!(
                "Data directory {}",
                data_dir.display()
            )));
        }
        let entries = EntriesDb::existing(&data_dir.join(JOURNALS_DB_FILE))?;
        Ok(Self {
            root: data_dir.to_path_buf(),
            entries,
            secrets: SecretsFile::new(&data_dir.join(SECRETS_FILE)),
        })
    }

    /// Data directory root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn secrets(&self) -> &SecretsFile {
        &self.secrets
    }

    pub fn journal_dao(&self) -> SqliteJournalDao {
        SqliteJournalDao::new(self.entries.clone())
    }

    pub fn password_dao(&self) -> FilePasswordDao {
        FilePasswordDao::new(self.secrets.clone())
    }

    pub fn user_dao(&self) -> FileUserDao {
        FileUserDao::new(self.secrets.clone())
    }

    /// Check both stores. Returns one message per problem found.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(err) = self.entries.check_integrity() {
            problems.push(err.to_string());
        }
        match self.secrets.read() {
            Ok(doc) => {
                for (key, _) in secrets::REQUIRED_KEYS {
                    if !doc.contains_key(key) {
                        problems.push(format!("Secrets file is missing key `{}`", key));
                    }
                }
            }
            Err(err) => problems.push(err.to_string()),
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_initialize_lays_out_data_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("data");

        let storage = Storage::initialize(&root).unwrap();

        assert_eq!(storage.root(), root.as_path());
        assert!(root.join(JOURNALS_DB_FILE).exists());
        let secrets = std::fs::read_to_string(root.join(SECRETS_FILE)).unwrap();
        assert_eq!(
            secrets,
            "password=p\nsecurity_question=\nsecurity_answer=\n"
        );
        assert!(storage.check().is_empty());
    }

    #[test]
    fn test_check_reports_missing_key() {
        let dir = tempdir().unwrap();
        let storage = Storage::initialize(dir.path()).unwrap();
        std::fs::write(dir.path().join(SECRETS_FILE), "password=alpha\n").unwrap();

        let problems = storage.check();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].contains("security_question"));
    }

    #[test]
    fn test_open_requires_prepared_directory() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("data");
        assert!(matches!(
            Storage::open(&root),
            Err(JournalError::NotFound(_))
        ));

        std::fs::create_dir_all(&root).unwrap();
        assert!(matches!(
            Storage::open(&root),
            Err(JournalError::NotFound(_))
        ));
        assert!(!root.join(JOURNALS_DB_FILE).exists());

        Storage::initialize(&root).unwrap();
        let storage = Storage::open(&root).expect("open should succeed");
        assert!(storage.check().is_empty());
    }

    #[test]
    fn test_initialize_on_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        let result = Storage::initialize(&blocker);
        assert!(matches!(result, Err(JournalError::Storage(_))));
    }
}
