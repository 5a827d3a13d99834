//! Interactive command loop.
//!
//! The shell owns the session state and dispatches typed-in commands to the
//! handlers under `commands/`. Recoverable shelf errors are rendered and
//! the loop continues; only I/O failures abort the process.

use bookshelf_core::BookStore;

use crate::commands;
use crate::helpers::LineReader;
use crate::ui::{badge, Badge, UiContext};

const COMMAND_SUMMARY: &str = "add, list, search, delete, export, help, exit";

/// State threaded through every command handler.
pub struct ShellSession<S: BookStore> {
    pub store: S,
    pub reader: LineReader,
    pub ui: UiContext,
    pub quiet: bool,
}

/// Run the command loop until `exit` or end of input.
pub fn run<S: BookStore>(session: &mut ShellSession<S>) -> anyhow::Result<()> {
    if !session.quiet {
        println!("Bookshelf - your personal book collection");
        println!("Commands: {}", COMMAND_SUMMARY);
    }

    loop {
        let Some(line) = session.reader.prompt("command")? else {
            break;
        };
        let command = line.trim().to_lowercase();

        match command.as_str() {
            "" => continue,
            "add" => commands::handle_add(session)?,
            "list" => commands::handle_list(session)?,
            "search" => commands::handle_search(session)?,
            "delete" => commands::handle_delete(session)?,
            "export" => commands::handle_export(session)?,
            "help" => {
                println!("Commands: {}", COMMAND_SUMMARY);
            }
            "exit" | "quit" => {
                if !session.quiet {
                    println!("Bye");
                }
                break;
            }
            other => {
                println!(
                    "{}",
                    badge(
                        &session.ui,
                        Badge::Err,
                        &format!("Unknown command \"{}\" (try: {})", other, COMMAND_SUMMARY),
                    )
                );
            }
        }
    }

    Ok(())
}
