//! Environment detection for UI rendering.

use std::io::{self, IsTerminal};

use super::mode::OutputMode;

/// UI context resolved once at startup and threaded through the shell.
#[derive(Debug, Clone, Copy)]
pub struct UiContext {
    pub mode: OutputMode,
    pub color: bool,
}

impl UiContext {
    /// Detect the output environment.
    ///
    /// Color requires pretty mode and is further disabled by the
    /// `--no-color` flag or a set `NO_COLOR` environment variable.
    pub fn from_env(no_color_flag: bool) -> Self {
        let is_tty = io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let mode = OutputMode::resolve(is_tty, term_is_dumb);

        let no_color_env = std::env::var_os("NO_COLOR").is_some();
        let color = mode.is_pretty() && !no_color_flag && !no_color_env;

        Self { mode, color }
    }
}
