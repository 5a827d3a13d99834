//! Input handling for the interactive shell.

use std::io::{self, IsTerminal};

use dialoguer::Input;

/// Reads prompted lines from the user.
///
/// On a TTY this prompts through `dialoguer`; when stdin is not a terminal
/// it reads raw lines instead, so the binary stays scriptable (piped
/// command scripts, test harnesses). The stdin lock is only taken in the
/// non-interactive case, leaving the terminal free for `dialoguer`.
pub struct LineReader {
    lines: Option<io::Lines<io::StdinLock<'static>>>,
}

impl LineReader {
    pub fn from_stdin() -> Self {
        let lines = if io::stdin().is_terminal() {
            None
        } else {
            Some(io::stdin().lines())
        };
        Self { lines }
    }

    /// Read one line, prompting with `label` when interactive.
    ///
    /// Returns `Ok(None)` on end of input (EOF on a piped stdin, or an
    /// interrupted prompt), which the shell treats as a request to exit.
    pub fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        match self.lines {
            None => match Input::<String>::new()
                .with_prompt(label)
                .allow_empty(true)
                .interact_text()
            {
                Ok(value) => Ok(Some(value)),
                Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => {
                    Ok(None)
                }
                Err(err) => Err(anyhow::anyhow!("Failed to read input: {}", err)),
            },
            Some(ref mut lines) => match lines.next() {
                Some(line) => {
                    let line = line.map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
                    Ok(Some(line))
                }
                None => Ok(None),
            },
        }
    }
}
