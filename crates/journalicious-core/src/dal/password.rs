//! Secrets-file password DAO.

use log::info;

use crate::error::Result;
use crate::storage::secrets::{DEFAULT_PASSWORD_VALUE, PASSWORD_KEY};
use crate::storage::SecretsFile;

use super::PasswordDao;

#[derive(Debug, Clone)]
pub struct FilePasswordDao {
    secrets: SecretsFile,
}

impl FilePasswordDao {
    pub fn new(secrets: SecretsFile) -> Self {
        Self { secrets }
    }
}

impl PasswordDao for FilePasswordDao {
    fn load(&self) -> Result<String> {
        if let Some(value) = self.secrets.get(PASSWORD_KEY)? {
            return Ok(value);
        }
        self.secrets.set(PASSWORD_KEY, DEFAULT_PASSWORD_VALUE)?;
        info!("event=password_bootstrap module=dal status=ok");
        Ok(DEFAULT_PASSWORD_VALUE.to_string())
    }

    fn store(&self, value: &str) -> Result<()> {
        self.secrets.set(PASSWORD_KEY, value)
    }
}
