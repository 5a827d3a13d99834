//! Store trait definition.
//!
//! The `BookStore` trait defines the contract between the record store and
//! its callers. The CLI programs against this trait only, so alternative
//! stores can be swapped in without touching the shell.

use uuid::Uuid;

use super::query::SearchQuery;
use super::types::Book;
use crate::error::Result;

/// Store interface for a book collection.
///
/// All implementations must ensure:
/// - Identifiers are unique within the collection at all times
/// - Every stored record passed validation at insert time
/// - Failed operations leave the collection exactly as it was
/// - `list` and `search` preserve insertion order
pub trait BookStore {
    /// Add a book to the collection.
    ///
    /// The stored copy is normalized: title and author trimmed, tags
    /// trimmed, lower-cased, and stripped of empties. Genres are copied
    /// verbatim.
    ///
    /// # Errors
    ///
    /// - `ShelfError::EmptyTitle` / `EmptyAuthor` if blank after trimming
    /// - `ShelfError::InvalidYear` if the year is missing (reported with
    ///   the `0` sentinel) or outside the accepted range
    /// - `ShelfError::DuplicateId` if the identifier is already present
    fn add(&mut self, book: Book) -> Result<()>;

    /// Remove the book with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::NotFound` if no book has that identifier.
    fn delete(&mut self, id: &Uuid) -> Result<()>;

    /// Snapshot of the collection in insertion order.
    fn list(&self) -> Vec<Book>;

    /// Books matching the query, in insertion order.
    ///
    /// # Errors
    ///
    /// - `ShelfError::EmptySearchQuery` for title/author/tag queries whose
    ///   text is empty after normalization
    /// - `ShelfError::InvalidYear` for year queries outside the accepted
    ///   range
    fn search(&self, query: &SearchQuery) -> Result<Vec<Book>>;
}
