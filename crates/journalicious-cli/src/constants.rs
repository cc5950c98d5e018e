//! Constants used throughout the CLI.

/// Binary name, used in hints and completions.
pub const BIN_NAME: &str = "journalicious";

/// Display name shown in screen headers.
pub const APP_TITLE: &str = "Journalicious";

/// Environment variables read by the CLI.
pub mod env {
    pub const DATA_DIR: &str = "JOURNALICIOUS_DATA_DIR";
    pub const CONFIG: &str = "JOURNALICIOUS_CONFIG";
    pub const LOG: &str = "JOURNALICIOUS_LOG";
    pub const PASSWORD: &str = "JOURNALICIOUS_PASSWORD";
}

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (data directory, entries database).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password).
    pub const AUTH_FAILED: i32 = 5;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}
