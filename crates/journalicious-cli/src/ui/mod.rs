//! UI primitives for the Journalicious terminal front-end.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens, color styles, symbols
//! - **Render**: Tables, headers, receipts, hints, formatted text
//! - **Prompt**: Themed dialoguer prompts
//! - **Format**: String utilities (truncate, single-line)

mod context;
pub mod format;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, print_error, receipt, simple_table, Column,
};
