//! How screens are drawn for the current terminal.

/// Drawing style for headers, key-value lines, and receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Undecorated lines; used when stdout is piped or the terminal is dumb
    #[default]
    Plain,
    /// Title bar, dividers, and styled labels for a real terminal
    Pretty,
}

impl OutputMode {
    /// Pretty only for a capable terminal on stdout.
    pub fn for_terminal(stdout_is_tty: bool, term_is_dumb: bool) -> Self {
        match (stdout_is_tty, term_is_dumb) {
            (true, false) => Self::Pretty,
            _ => Self::Plain,
        }
    }

    pub fn is_pretty(&self) -> bool {
        *self == Self::Pretty
    }
}
