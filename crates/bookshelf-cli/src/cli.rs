use clap::Parser;

use bookshelf_core::VERSION;

/// Bookshelf - an interactive manager for a personal book collection
///
/// Runs a command loop reading `add`, `list`, `search`, `delete`, `export`,
/// `help`, and `exit`. The collection lives in memory only and starts empty
/// on every run.
#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
