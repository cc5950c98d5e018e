use std::io::{self, Write};

use log::info;
use zeroize::Zeroizing;

use journalicious_core::storage::secrets::PASSWORD_KEY;
use journalicious_core::{JournalDao, JournalEntry, Storage};

use crate::app::AppContext;
use crate::cli::{ExportArgs, ExportFormat};
use crate::constants::{env, BIN_NAME};
use crate::errors::CliError;
use crate::ui::prompt::prompt_secret;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    authenticate(ctx, &storage)?;

    let entries = storage.journal_dao().list_all()?;
    let mut out = io::stdout().lock();
    write_entries(&mut out, &entries, args.format)?;
    info!(
        "event=export module=cli status=ok count={} format={:?}",
        entries.len(),
        args.format
    );
    Ok(())
}

/// Require the journal password before any entry leaves the data directory.
fn authenticate(ctx: &AppContext, storage: &Storage) -> anyhow::Result<()> {
    let entered = match std::env::var(env::PASSWORD) {
        Ok(value) => Zeroizing::new(value),
        Err(_) => {
            let ui = ctx.ui()?;
            if !ui.is_interactive() {
                return Err(CliError::auth_failed_with_hint(
                    "A password is required to export entries",
                    format!(
                        "Hint: Set {} or run `{} export` in a terminal.",
                        env::PASSWORD,
                        BIN_NAME
                    ),
                )
                .into());
            }
            prompt_secret(&ui, "Password")?
        }
    };

    // Raw read: a missing key is an integrity failure, never the default.
    let stored = match storage.secrets().get(PASSWORD_KEY)? {
        Some(value) => Zeroizing::new(value),
        None => {
            info!("event=export module=cli status=error error_code=password_missing");
            return Err(CliError::IntegrityFailed(vec![format!(
                "Secrets file is missing key `{}`; run `{} check`",
                PASSWORD_KEY, BIN_NAME
            )])
            .into());
        }
    };
    if *stored != *entered {
        info!("event=export module=cli status=denied");
        return Err(CliError::auth_failed("Incorrect password").into());
    }
    Ok(())
}

fn write_entries(
    out: &mut impl Write,
    entries: &[JournalEntry],
    format: ExportFormat,
) -> anyhow::Result<()> {
    match format {
        ExportFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
        }
        ExportFormat::Jsonl => {
            for entry in entries {
                writeln!(out, "{}", serde_json::to_string(entry)?)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use journalicious_core::JournalFields;

    fn entry(id: i64, title: &str) -> JournalEntry {
        let fields = JournalFields::new(title, "2024-03-01", 9, 5, "body")
            .expect("fields should be valid");
        JournalEntry::new(id, fields)
    }

    #[test]
    fn test_jsonl_writes_one_object_per_line() {
        let mut buffer = Vec::new();
        write_entries(
            &mut buffer,
            &[entry(2, "second"), entry(1, "first")],
            ExportFormat::Jsonl,
        )
        .expect("write should succeed");

        let text = String::from_utf8(buffer).expect("output should be utf-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid json");
        assert_eq!(first["id"], 2);
        assert_eq!(first["title"], "second");
        assert_eq!(first["date"], "2024-03-01");
    }

    #[test]
    fn test_json_writes_array() {
        let mut buffer = Vec::new();
        write_entries(&mut buffer, &[entry(1, "only")], ExportFormat::Json)
            .expect("write should succeed");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["hour"], 9);
        assert_eq!(items[0]["minute"], 5);
        assert_eq!(items[0]["context"], "body");
    }

    #[test]
    fn test_empty_journal_exports_empty_array() {
        let mut buffer = Vec::new();
        write_entries(&mut buffer, &[], ExportFormat::Json).expect("write should succeed");
        assert_eq!(String::from_utf8(buffer).expect("utf-8").trim(), "[]");
    }
}
