//! Bookshelf CLI - an interactive manager for a personal book collection.
//!
//! This is the command-line interface for Bookshelf. It wires the in-memory
//! shelf from the core library to an interactive command loop; all record
//! semantics (validation, normalization, search) live in `bookshelf-core`.

mod cli;
mod commands;
mod helpers;
mod output;
mod shell;
mod ui;

use clap::Parser;

use bookshelf_core::Shelf;

use crate::cli::Cli;
use crate::helpers::LineReader;
use crate::shell::ShellSession;
use crate::ui::UiContext;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut session = ShellSession {
        store: Shelf::new(),
        reader: LineReader::from_stdin(),
        ui: UiContext::from_env(cli.no_color),
        quiet: cli.quiet,
    };

    shell::run(&mut session)
}
