//! In-memory shelf implementation.

use uuid::Uuid;

use super::query::SearchQuery;
use super::traits::BookStore;
use super::types::{Book, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};
use crate::error::{Result, ShelfError};

/// Year value reported when a record has no publication year at all.
const MISSING_YEAR_SENTINEL: i32 = 0;

/// An in-memory, insertion-ordered book collection.
///
/// The shelf owns the authoritative sequence of records; callers receive
/// clones from `list` and `search` and cannot mutate shelf state through
/// them. Validation failures leave the collection untouched.
#[derive(Debug, Default)]
pub struct Shelf {
    books: Vec<Book>,
}

impl Shelf {
    /// Create an empty shelf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of books on the shelf.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the shelf holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn validate(book: &Book) -> Result<()> {
        if book.title.trim().is_empty() {
            return Err(ShelfError::EmptyTitle);
        }
        if book.author.trim().is_empty() {
            return Err(ShelfError::EmptyAuthor);
        }
        match book.publication_year {
            Some(year) if (MIN_PUBLICATION_YEAR..=MAX_PUBLICATION_YEAR).contains(&year) => Ok(()),
            Some(year) => Err(ShelfError::InvalidYear(year)),
            None => Err(ShelfError::InvalidYear(MISSING_YEAR_SENTINEL)),
        }
    }

    /// Trim surrounding whitespace and lower-case. Applied to tags on
    /// insert and to search text for title/author/tag queries.
    fn normalize(value: &str) -> String {
        value.trim().to_lowercase()
    }

    /// Normalize each tag and drop the ones that end up empty. Order and
    /// duplicates of the survivors are preserved.
    fn normalize_tags(tags: &[String]) -> Vec<String> {
        tags.iter()
            .map(|tag| Self::normalize(tag))
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

impl BookStore for Shelf {
    fn add(&mut self, book: Book) -> Result<()> {
        Self::validate(&book)?;
        if self.books.iter().any(|existing| existing.id == book.id) {
            return Err(ShelfError::DuplicateId(book.id));
        }

        let mut normalized = book;
        normalized.title = normalized.title.trim().to_string();
        normalized.author = normalized.author.trim().to_string();
        normalized.tags = Self::normalize_tags(&normalized.tags);

        self.books.push(normalized);
        Ok(())
    }

    fn delete(&mut self, id: &Uuid) -> Result<()> {
        if !self.books.iter().any(|book| book.id == *id) {
            return Err(ShelfError::NotFound(*id));
        }
        // Exactly one match under the uniqueness invariant, but removal is
        // written over the whole collection regardless.
        self.books.retain(|book| book.id != *id);
        Ok(())
    }

    fn list(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn search(&self, query: &SearchQuery) -> Result<Vec<Book>> {
        let matches: Vec<Book> = match query {
            SearchQuery::Title(text) => {
                let needle = Self::normalize(text);
                if needle.is_empty() {
                    return Err(ShelfError::EmptySearchQuery);
                }
                self.books
                    .iter()
                    .filter(|book| Self::normalize(&book.title).contains(&needle))
                    .cloned()
                    .collect()
            }
            SearchQuery::Author(text) => {
                let needle = Self::normalize(text);
                if needle.is_empty() {
                    return Err(ShelfError::EmptySearchQuery);
                }
                self.books
                    .iter()
                    .filter(|book| Self::normalize(&book.author).contains(&needle))
                    .cloned()
                    .collect()
            }
            SearchQuery::Genre(genre) => self
                .books
                .iter()
                .filter(|book| book.genres.contains(genre))
                .cloned()
                .collect(),
            SearchQuery::Tag(text) => {
                let needle = Self::normalize(text);
                if needle.is_empty() {
                    return Err(ShelfError::EmptySearchQuery);
                }
                self.books
                    .iter()
                    .filter(|book| book.tags.iter().any(|tag| *tag == needle))
                    .cloned()
                    .collect()
            }
            SearchQuery::Year(year) => {
                if !(MIN_PUBLICATION_YEAR..=MAX_PUBLICATION_YEAR).contains(year) {
                    return Err(ShelfError::InvalidYear(*year));
                }
                self.books
                    .iter()
                    .filter(|book| book.publication_year == Some(*year))
                    .cloned()
                    .collect()
            }
        };
        Ok(matches)
    }
}
