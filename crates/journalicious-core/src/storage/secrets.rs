//! Flat-file secrets store.
//!
//! The file is line oriented `key=value`. Values are escaped so that any text
//! survives a round trip. Lines that are not pairs (comments, blanks) and keys
//! this crate does not know about are written back exactly as they were read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::{JournalError, Result};

/// Key holding the login password.
pub const PASSWORD_KEY: &str = "password";

/// Key holding the security question text.
pub const SECURITY_QUESTION_KEY: &str = "security_question";

/// Key holding the security question answer.
pub const SECURITY_ANSWER_KEY: &str = "security_answer";

/// Password stored for a user who has never set one.
pub const DEFAULT_PASSWORD_VALUE: &str = "p";

/// Keys every secrets file carries, with the value written when absent.
pub const REQUIRED_KEYS: [(&str, &str); 3] = [
    (PASSWORD_KEY, DEFAULT_PASSWORD_VALUE),
    (SECURITY_QUESTION_KEY, ""),
    (SECURITY_ANSWER_KEY, ""),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Pair {
        key: String,
        value: String,
        // Original text, kept until the pair is overwritten.
        raw: Option<String>,
    },
    Verbatim(String),
}

/// Parsed contents of a secrets file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretsDocument {
    lines: Vec<Line>,
}

impl SecretsDocument {
    /// Parse file contents. Never fails: unrecognised lines are kept verbatim.
    pub fn parse(text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| match line.split_once('=') {
                Some((key, value)) if is_key(key) => Line::Pair {
                    key: key.to_string(),
                    value: unescape(value),
                    raw: Some(line.to_string()),
                },
                _ => Line::Verbatim(line.to_string()),
            })
            .collect();
        Self { lines }
    }

    /// Value of the first pair named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Pair { key: k, value, .. } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// Whether a pair named `key` exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Overwrite the first pair named `key`, or append a new pair.
    pub fn set(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Pair { key: k, value: v, raw } = line {
                if k.as_str() == key {
                    *v = value.to_string();
                    *raw = None;
                    return;
                }
            }
        }
        self.lines.push(Line::Pair {
            key: key.to_string(),
            value: value.to_string(),
            raw: None,
        });
    }

    /// Serialize back to file contents.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            match line {
                Line::Pair {
                    raw: Some(raw), ..
                } => out.push_str(raw),
                Line::Pair { key, value, .. } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(&escape(value));
                }
                Line::Verbatim(text) => out.push_str(text),
            }
            out.push('\n');
        }
        out
    }
}

fn is_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('#')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Handle to the secrets file. Every call reads or rewrites the whole file.
#[derive(Debug, Clone)]
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file. A missing file reads as empty.
    pub fn read(&self) -> Result<SecretsDocument> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(SecretsDocument::parse(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SecretsDocument::default()),
            Err(err) => Err(JournalError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    /// Replace the file contents atomically.
    pub fn write(&self, doc: &SecretsDocument) -> Result<()> {
        crate::fs::write_atomic(&self.path, doc.render().as_bytes()).map_err(|err| {
            JournalError::Storage(format!(
                "Failed to write {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    /// Read a single key.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.get(key).map(str::to_string))
    }

    /// Write a single key, preserving every other line.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_all(&[(key, value)])
    }

    /// Write several keys in one atomic replace. Either all land or none do.
    pub fn set_all(&self, pairs: &[(&str, &str)]) -> Result<()> {
        let mut doc = self.read()?;
        for (key, value) in pairs {
            doc.set(key, value);
        }
        self.write(&doc)?;
        for (key, _) in pairs {
            debug!("event=secrets_write module=storage status=ok key={}", key);
        }
        Ok(())
    }

    /// Add any of `defaults` that are missing. Returns whether the file changed.
    pub fn ensure_keys(&self, defaults: &[(&str, &str)]) -> Result<bool> {
        let mut doc = self.read()?;
        let mut changed = false;
        for (key, value) in defaults {
            if !doc.contains_key(key) {
                doc.set(key, value);
                changed = true;
            }
        }
        if changed {
            self.write(&doc)?;
            info!("event=secrets_bootstrap module=storage status=ok");
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_and_get() {
        let doc = SecretsDocument::parse("password=alpha\nsecurity_question=Pet name?\n");
        assert_eq!(doc.get("password"), Some("alpha"));
        assert_eq!(doc.get("security_question"), Some("Pet name?"));
        assert_eq!(doc.get("security_answer"), None);
    }

    #[test]
    fn test_value_may_contain_equals_and_be_empty() {
        let doc = SecretsDocument::parse("password=a=b\nsecurity_answer=\n");
        assert_eq!(doc.get("password"), Some("a=b"));
        assert_eq!(doc.get("security_answer"), Some(""));
    }

    #[test]
    fn test_unknown_lines_preserved_verbatim() {
        let text = "# comment\ntheme = dark\npassword=p\nextra=keep\\x\n\n";
        let mut doc = SecretsDocument::parse(text);
        doc.set("password", "alpha");

        let rendered = doc.render();
        assert_eq!(
            rendered,
            "# comment\ntheme = dark\npassword=alpha\nextra=keep\\x\n\n"
        );
    }

    #[test]
    fn test_set_appends_missing_key() {
        let mut doc = SecretsDocument::parse("password=p\n");
        doc.set("security_question", "Pet name?");
        assert_eq!(doc.render(), "password=p\nsecurity_question=Pet name?\n");
    }

    #[test]
    fn test_multiline_value_round_trips() {
        let mut doc = SecretsDocument::default();
        doc.set("security_question", "line one\nline \\two");
        let reparsed = SecretsDocument::parse(&doc.render());
        assert_eq!(
            reparsed.get("security_question"),
            Some("line one\nline \\two")
        );
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let file = SecretsFile::new(&dir.path().join("secrets.txt"));
        assert_eq!(file.get("password").unwrap(), None);
    }

    #[test]
    fn test_set_writes_through() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.txt");
        std::fs::write(&path, "custom=1\npassword=p\n").unwrap();

        let file = SecretsFile::new(&path);
        file.set("password", "alpha").unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "custom=1\npassword=alpha\n");
    }

    #[test]
    fn test_set_all_writes_every_key_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.txt");
        std::fs::write(&path, "password=alpha\nsecurity_question=Pet name?\nsecurity_answer=Fido\n")
            .unwrap();

        let file = SecretsFile::new(&path);
        file.set_all(&[
            (SECURITY_QUESTION_KEY, "Mother's maiden name?"),
            (SECURITY_ANSWER_KEY, "Smith"),
        ])
        .expect("set_all should succeed");

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "password=alpha\nsecurity_question=Mother's maiden name?\nsecurity_answer=Smith\n"
        );
    }

    #[test]
    fn test_ensure_keys_only_adds_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("secrets.txt");
        std::fs::write(&path, "password=alpha\n").unwrap();

        let file = SecretsFile::new(&path);
        assert!(file.ensure_keys(&REQUIRED_KEYS).unwrap());
        assert!(!file.ensure_keys(&REQUIRED_KEYS).unwrap());

        let doc = file.read().unwrap();
        assert_eq!(doc.get(PASSWORD_KEY), Some("alpha"));
        assert_eq!(doc.get(SECURITY_QUESTION_KEY), Some(""));
        assert_eq!(doc.get(SECURITY_ANSWER_KEY), Some(""));
    }
}
