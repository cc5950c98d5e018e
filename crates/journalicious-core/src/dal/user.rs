//! Secrets-file user profile DAO.

use crate::error::Result;
use crate::storage::secrets::{SECURITY_ANSWER_KEY, SECURITY_QUESTION_KEY};
use crate::storage::SecretsFile;

use super::UserDao;

#[derive(Debug, Clone)]
pub struct FileUserDao {
    secrets: SecretsFile,
}

impl FileUserDao {
    pub fn new(secrets: SecretsFile) -> Self {
        Self { secrets }
    }
}

impl UserDao for FileUserDao {
    fn load_question(&self) -> Result<String> {
        Ok(self
            .secrets
            .get(SECURITY_QUESTION_KEY)?
            .unwrap_or_default())
    }

    fn load_answer(&self) -> Result<String> {
        Ok(self.secrets.get(SECURITY_ANSWER_KEY)?.unwrap_or_default())
    }

    fn store_question(&self, question: &str) -> Result<()> {
        self.secrets.set(SECURITY_QUESTION_KEY, question)
    }

    fn store_answer(&self, answer: &str) -> Result<()> {
        self.secrets.set(SECURITY_ANSWER_KEY, answer)
    }

    fn store_profile(&self, question: &str, answer: &str) -> Result<()> {
        self.secrets
            .set_all(&[(SECURITY_QUESTION_KEY, question), (SECURITY_ANSWER_KEY, answer)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_store_profile_replaces_both_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.txt");
        std::fs::write(&path, "password=p\nsecurity_question=Pet name?\nsecurity_answer=Fido\n")
            .unwrap();
        let dao = FileUserDao::new(SecretsFile::new(&path));

        dao.store_profile("Mother's maiden name?", "Smith")
            .expect("store_profile should succeed");

        assert_eq!(dao.load_question().unwrap(), "Mother's maiden name?");
        assert_eq!(dao.load_answer().unwrap(), "Smith");
    }
}
