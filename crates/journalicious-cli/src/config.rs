//! Optional TOML configuration.
//!
//! A missing file means defaults everywhere. Command-line flags and
//! environment variables take precedence over anything read here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JournaliciousConfig {
    pub data: DataSection,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSection {
    pub dir: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub ascii: bool,
    pub color: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            ascii: false,
            color: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<JournaliciousConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read `path` if it exists, otherwise return defaults.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<JournaliciousConfig> {
    if path.exists() {
        read_config(path)
    } else {
        Ok(JournaliciousConfig::default())
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("journalicious"));
        }
    }
    Ok(home_dir()?.join(".config").join("journalicious"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("journalicious"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("journalicious"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
