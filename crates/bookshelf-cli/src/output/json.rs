//! JSON output formatting for books.

use bookshelf_core::Book;

/// Serialize a book collection as pretty-printed JSON.
///
/// Genres serialize to their raw names, so the output round-trips through
/// the same names the shell accepts as input.
pub fn books_json(books: &[Book]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(books)
        .map_err(|e| anyhow::anyhow!("Failed to serialize books: {}", e))
}
