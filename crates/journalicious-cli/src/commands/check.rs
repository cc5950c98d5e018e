use log::{info, warn};

use crate::app::AppContext;
use crate::errors::CliError;

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let problems = storage.check();
    if !problems.is_empty() {
        warn!(
            "event=check module=cli status=error problems={}",
            problems.len()
        );
        return Err(CliError::IntegrityFailed(problems).into());
    }

    info!("event=check module=cli status=ok");
    if !ctx.quiet() {
        println!("Integrity check: OK");
        println!("- entries database: OK");
        println!("- secrets file: OK");
    }
    Ok(())
}
