//! Application-level utilities for the Journalicious CLI.
//!
//! This module provides:
//! - Path resolution for the config file and data directory
//! - A per-invocation context bundling flags with lazily-loaded config

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_data_dir};
