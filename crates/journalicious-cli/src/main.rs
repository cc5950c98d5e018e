//! Journalicious CLI - a private, password-protected personal journal
//!
//! Running `journalicious` with no subcommand opens the interactive app at the
//! login screen. The subcommands cover scripted use: exporting entries,
//! checking the data directory, and generating shell completions.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod screens;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{check, export, misc};
use crate::errors::CliError;
use crate::ui::prompt::require_interactive;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let result = run(&ctx, &cli);
    log::logger().flush();

    if let Err(e) = result {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        match ctx.ui() {
            Ok(ui_ctx) => print_error(&ui_ctx, &format!("{:#}", e), None),
            Err(_) => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    if let Some(Commands::Completions { shell }) = &cli.command {
        return misc::handle_completions(*shell);
    }

    start_logging(ctx, cli.command.is_none())?;

    match &cli.command {
        Some(Commands::Export(args)) => export::handle_export(ctx, args),
        Some(Commands::Check) => check::handle_check(ctx),
        Some(Commands::Completions { .. }) => Ok(()),
        None => {
            let ui = ctx.ui()?;
            require_interactive(&ui)?;
            let storage = ctx.initialize_storage()?;
            screens::run(&ui, &storage)
        }
    }
}

/// Start file logging under `<data dir>/logs`.
///
/// Subcommands never create the data directory, so they log only when it
/// already exists. A bad level is a usage error. Any other failure is
/// reported and the command carries on.
fn start_logging(ctx: &AppContext, creates_data_dir: bool) -> anyhow::Result<()> {
    let level = ctx.log_level()?;
    logging::normalize_level(&level).map_err(CliError::invalid_input)?;

    let data_dir = ctx.data_dir()?;
    if !creates_data_dir && !data_dir.is_dir() {
        return Ok(());
    }
    let log_dir = data_dir.join("logs");
    if let Err(message) = logging::init_logging(&level, &log_dir) {
        if !ctx.quiet() {
            eprintln!("Warning: logging disabled: {}", message);
        }
    }
    Ok(())
}
