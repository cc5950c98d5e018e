//! Application context for the Journalicious CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use journalicious_core::Storage;

use crate::cli::Cli;
use crate::config::{read_config_or_default, JournaliciousConfig};
use crate::errors::from_storage_open;
use crate::logging::DEFAULT_LOG_LEVEL;
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<JournaliciousConfig>,
    data_dir: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            data_dir: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&JournaliciousConfig> {
        self.config
            .get_or_try_init(|| read_config_or_default(&resolve_config_path()?))
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> anyhow::Result<&PathBuf> {
        self.data_dir
            .get_or_try_init(|| resolve_data_dir(self.cli.data_dir.as_deref(), self.config()?))
    }

    /// Log level from flag/env, then config, then the default.
    pub fn log_level(&self) -> anyhow::Result<String> {
        if let Some(level) = &self.cli.log_level {
            return Ok(level.clone());
        }
        Ok(self
            .config()?
            .logging
            .level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()))
    }

    /// Terminal context with flags layered over config.
    pub fn ui(&self) -> anyhow::Result<UiContext> {
        let config = self.config()?;
        Ok(UiContext::from_env(
            self.cli.no_color || !config.ui.color,
            self.cli.ascii || config.ui.ascii,
        ))
    }

    /// Prepare the data directory for the interactive app.
    pub fn initialize_storage(&self) -> anyhow::Result<Storage> {
        Ok(Storage::initialize(self.data_dir()?)?)
    }

    /// Attach to an existing data directory without changing it.
    pub fn open_storage(&self) -> anyhow::Result<Storage> {
        Storage::open(self.data_dir()?).map_err(from_storage_open)
    }
}
