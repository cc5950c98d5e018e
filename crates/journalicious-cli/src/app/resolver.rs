//! Path resolution for the config file and data directory.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, default_data_dir, JournaliciousConfig};
use crate::constants::env;

/// Resolve the config file path, checking JOURNALICIOUS_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory.
///
/// Order: `--data-dir` (or its env var), then `[data] dir` from config, then
/// the XDG data directory. Relative paths are anchored at the working directory.
pub fn resolve_data_dir(
    flag: Option<&Path>,
    config: &JournaliciousConfig,
) -> anyhow::Result<PathBuf> {
    let chosen = match (flag, config.data.dir.as_deref()) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(dir)) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => default_data_dir()?,
    };
    if chosen.is_absolute() {
        return Ok(chosen);
    }
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Cannot resolve working directory: {}", e))?;
    Ok(cwd.join(chosen))
}
