//! Helper utilities for the Bookshelf CLI.

mod input;
mod parsing;

pub use input::LineReader;
pub use parsing::{parse_delete_target, parse_genre, parse_genres, parse_tags, parse_year};
