//! Output formatting helpers for the CLI.
//!
//! This module renders books for display (table or plain lines) and for
//! machine consumption (JSON export).

mod json;
mod text;

pub use json::books_json;
pub use text::{print_book_list, print_numbered_list};
