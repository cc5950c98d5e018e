//! Themed prompt primitives for the interactive screens.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Editor, Input, Password, Select};
use zeroize::Zeroizing;

use super::context::UiContext;

fn theme(ctx: &UiContext) -> Box<dyn Theme> {
    if ctx.color {
        Box::new(ColorfulTheme::default())
    } else {
        Box::new(SimpleTheme)
    }
}

/// Fail unless both stdin and stdout are terminals.
pub fn require_interactive(ctx: &UiContext) -> anyhow::Result<()> {
    if ctx.is_interactive() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Interactive terminal required. Run on a TTY, or use `export`/`check`."
        ))
    }
}

/// Prompt for a single line of text, pre-filled with `initial`.
pub fn prompt_text(ctx: &UiContext, prompt: &str, initial: &str) -> anyhow::Result<String> {
    let theme = theme(ctx);
    let value = Input::<String>::with_theme(theme.as_ref())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a whole number, defaulting to `current`.
pub fn prompt_number(ctx: &UiContext, prompt: &str, current: u32) -> anyhow::Result<u32> {
    let theme = theme(ctx);
    let value = Input::<u32>::with_theme(theme.as_ref())
        .with_prompt(prompt)
        .default(current)
        .interact_text()?;
    Ok(value)
}

/// Edit multi-line text in `$EDITOR`. Leaving the editor without saving keeps `initial`.
pub fn prompt_long_text(initial: &str) -> anyhow::Result<String> {
    let edited = Editor::new()
        .extension(".md")
        .edit(initial)
        .map_err(|e| anyhow::anyhow!("Failed to run editor: {}", e))?;
    Ok(edited
        .map(|text| text.trim_end().to_string())
        .unwrap_or_else(|| initial.to_string()))
}

/// Prompt for a secret without echo. The buffer is wiped on drop.
pub fn prompt_secret(ctx: &UiContext, prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    let theme = theme(ctx);
    let value = Password::with_theme(theme.as_ref())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Zeroizing::new(value))
}

/// Prompt for selection from a list of options.
pub fn prompt_select<T: ToString>(
    ctx: &UiContext,
    prompt: &str,
    options: &[T],
    default: usize,
) -> anyhow::Result<usize> {
    let theme = theme(ctx);
    let result = Select::with_theme(theme.as_ref())
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(result)
}

/// Prompt for confirmation.
pub fn prompt_confirm(ctx: &UiContext, prompt: &str, default: bool) -> anyhow::Result<bool> {
    let theme = theme(ctx);
    let result = Confirm::with_theme(theme.as_ref())
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(result)
}
