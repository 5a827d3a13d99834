//! Error types for Bookshelf core operations.
//!
//! The taxonomy is closed: every failure a store operation can produce is
//! one of these variants, and all of them are recoverable. Errors are
//! returned to the immediate caller as typed results; the core never logs,
//! retries, or swallows them. The CLI layer maps these to user-facing
//! messages.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for Bookshelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Bookshelf operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    /// Title is empty after trimming surrounding whitespace
    #[error("title must not be empty")]
    EmptyTitle,

    /// Author is empty after trimming surrounding whitespace
    #[error("author must not be empty")]
    EmptyAuthor,

    /// Publication year is missing or outside the accepted range.
    ///
    /// A missing year is reported as `InvalidYear(0)`. The sentinel
    /// conflates "no value" with "year zero"; callers depend on the exact
    /// value, so it stays.
    #[error("invalid publication year: {0}")]
    InvalidYear(i32),

    /// A book with this identifier is already on the shelf
    #[error("duplicate book id: {0}")]
    DuplicateId(Uuid),

    /// No book with this identifier exists
    #[error("book not found: {0}")]
    NotFound(Uuid),

    /// Search text is empty after normalization
    #[error("search query must not be empty")]
    EmptySearchQuery,
}
