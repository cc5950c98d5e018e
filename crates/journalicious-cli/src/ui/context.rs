//! What the journal screens can rely on from the terminal they run in.

use std::io::IsTerminal;

use super::mode::OutputMode;

const FALLBACK_WIDTH: usize = 80;

/// Facts read once from the process environment.
#[derive(Debug, Clone, Default)]
struct TerminalEnv {
    stdout_is_tty: bool,
    stdin_is_tty: bool,
    term_is_dumb: bool,
    no_color: bool,
    width: Option<usize>,
}

impl TerminalEnv {
    fn read() -> Self {
        Self {
            stdout_is_tty: std::io::stdout().is_terminal(),
            stdin_is_tty: std::io::stdin().is_terminal(),
            term_is_dumb: std::env::var("TERM").is_ok_and(|term| term == "dumb"),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width: columns_from_env().or_else(window_columns),
        }
    }
}

/// Rendering decisions shared by every screen and command.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Both stdin and stdout are terminals, so the app can prompt
    pub interactive: bool,
    pub color: bool,
    pub unicode: bool,
    /// Columns available for tables
    pub width: usize,
    pub mode: OutputMode,
}

impl UiContext {
    /// Detect the terminal, then apply the `no_color` and `ascii` settings
    /// (already merged from flags and config).
    pub fn from_env(no_color: bool, ascii: bool) -> Self {
        Self::resolve(&TerminalEnv::read(), no_color, ascii)
    }

    fn resolve(env: &TerminalEnv, no_color: bool, ascii: bool) -> Self {
        Self {
            interactive: env.stdout_is_tty && env.stdin_is_tty,
            color: env.stdout_is_tty && !env.term_is_dumb && !env.no_color && !no_color,
            unicode: !ascii,
            width: env.width.unwrap_or(FALLBACK_WIDTH),
            mode: OutputMode::for_terminal(env.stdout_is_tty, env.term_is_dumb),
        }
    }

    /// Whether the login screen and other prompts can run.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

fn columns_from_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|&cols| cols > 0)
}

#[cfg(unix)]
fn window_columns() -> Option<usize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ fills the winsize struct we pass and nothing else.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut size) };
    (rc == 0 && size.ws_col > 0).then_some(usize::from(size.ws_col))
}

#[cfg(not(unix))]
fn window_columns() -> Option<usize> {
    None
}
