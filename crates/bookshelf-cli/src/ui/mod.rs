//! UI primitives for the Bookshelf CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, `TERM=dumb`)
//! - **Mode**: Output mode resolution (plain, pretty)
//! - **Theme**: Badge tokens and text styling
//! - **Format**: String utilities (short ids, truncation)

mod context;
pub mod format;
mod mode;
pub mod theme;

pub use context::UiContext;
pub use format::{short_id, truncate};
pub use mode::OutputMode;
pub use theme::{badge, Badge};
