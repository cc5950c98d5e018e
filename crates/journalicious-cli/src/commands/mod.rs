//! Non-interactive subcommands.

pub mod check;
pub mod export;
pub mod misc;
