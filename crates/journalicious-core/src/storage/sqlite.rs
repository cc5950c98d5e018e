//! SQLite entries store.
//!
//! The store never keeps a connection open. Callers borrow a fresh
//! connection for the duration of one operation via [`EntriesDb::with_connection`];
//! it is closed when the closure returns, on success and error paths alike.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{debug, error, info};
use rusqlite::{Connection, OpenFlags, Params, Row};

use crate::error::{JournalError, Result};

/// Schema version recorded in `PRAGMA user_version`.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS journals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        date TEXT,
        hour INTEGER,
        minute INTEGER,
        context TEXT
    );
"#;

/// Handle to the on-disk entries database.
#[derive(Debug, Clone)]
pub struct EntriesDb {
    path: PathBuf,
}

impl EntriesDb {
    /// Create the database and schema if absent, then return a handle.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` if the file cannot be opened or was
    /// written by a newer schema version.
    pub fn initialize(path: &Path) -> Result<Self> {
        let started_at = Instant::now();
        let conn = Connection::open(path).map_err(|err| {
            error!(
                "event=db_init module=storage status=error error_code=db_open_failed error={}",
                err
            );
            JournalError::from(err)
        })?;

        let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version > SCHEMA_VERSION {
            return Err(JournalError::Storage(format!(
                "Database schema version {} is newer than supported {}",
                version, SCHEMA_VERSION
            )));
        }
        if version < SCHEMA_VERSION {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            info!(
                "event=db_schema module=storage status=ok from_version={} to_version={}",
                version, SCHEMA_VERSION
            );
        }

        info!(
            "event=db_init module=storage status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Handle to an existing database, without creating or migrating it.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::NotFound` if the file does not exist.
    pub fn existing(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(JournalError::NotFound(format!(
                "Entries database {}",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh read-write connection. The file must already exist.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Run `f` against a connection scoped to this call.
    pub fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.connect()?;
        f(&conn)
    }

    /// Execute a parameterised statement, returning the number of changed rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        self.with_connection(|conn| Ok(conn.execute(sql, params)?))
    }

    /// Execute an insert and return the store-assigned rowid.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        self.with_connection(|conn| {
            conn.execute(sql, params)?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Run a parameterised query, mapping each row as it is stepped.
    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, mut map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> Result<T>,
    {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let mut rows = stmt.query(params)?;
            let mut out = Vec::new();
            while let Some(row) = rows.next()? {
                out.push(map(row)?);
            }
            debug!("event=db_query module=storage status=ok rows={}", out.len());
            Ok(out)
        })
    }

    /// Verify database integrity and schema version.
    pub fn check_integrity(&self) -> Result<()> {
        self.with_connection(|conn| {
            let result: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result != "ok" {
                return Err(JournalError::Storage(format!(
                    "Integrity check failed: {}",
                    result
                )));
            }

            let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
            if version != SCHEMA_VERSION {
                return Err(JournalError::Storage(format!(
                    "Unexpected schema version {} (expected {})",
                    version, SCHEMA_VERSION
                )));
            }

            let tables: i64 = conn.query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'journals'",
                [],
                |row| row.get(0),
            )?;
            if tables != 1 {
                return Err(JournalError::Storage(
                    "Missing journals table".to_string(),
                ));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_initialize_creates_schema() {
        let dir = tempdir().unwrap();
        let db = EntriesDb::initialize(&dir.path().join("journals.db")).unwrap();

        assert!(db.path().exists());
        db.check_integrity().unwrap();
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journals.db");
        let db = EntriesDb::initialize(&path).unwrap();
        db.insert(
            "INSERT INTO journals (title, date, hour, minute, context) VALUES ('a', '2024-01-01', 1, 2, '')",
            [],
        )
        .unwrap();

        let db = EntriesDb::initialize(&path).unwrap();
        let count = db
            .query_rows("SELECT COUNT(*) FROM journals", [], |row| Ok(row.get::<_, i64>(0)?))
            .unwrap();
        assert_eq!(count, vec![1]);
    }

    #[test]
    fn test_newer_schema_version_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journals.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1)
                .unwrap();
        }

        let result = EntriesDb::initialize(&path);
        assert!(matches!(result, Err(JournalError::Storage(_))));
    }

    #[test]
    fn test_missing_database_file_is_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("journals.db");
        let db = EntriesDb::initialize(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let result = db.execute("DELETE FROM journals", []);
        assert!(matches!(result, Err(JournalError::Storage(_))));
    }
}
