//! Typed search queries.

use super::types::Genre;

/// A search query against the shelf, one variant per search kind.
///
/// Dispatch over this type is exhaustive: adding a variant forces every
/// match site to handle it. Matching semantics per variant:
///
/// - `Title` / `Author`: case-insensitive substring containment against the
///   normalized field value
/// - `Genre`: exact membership in the record's genre sequence
/// - `Tag`: exact membership in the normalized tag sequence
/// - `Year`: exact equality on the publication year
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    Title(String),
    Author(String),
    Genre(Genre),
    Tag(String),
    Year(i32),
}
