use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use journalicious_core::VERSION;

use crate::constants::env;

/// Journalicious - a private, password-protected personal journal
#[derive(Parser)]
#[command(name = "journalicious")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding journals.db and secrets.txt
    #[arg(short, long, global = true, env = env::DATA_DIR)]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = env::LOG)]
    pub log_level: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One pretty-printed JSON array
    Json,
    /// One JSON object per line
    Jsonl,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print every entry as JSON, newest first
    Export(ExportArgs),

    /// Check the entries database and secrets file
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
