//! Core data types for the book collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Earliest accepted publication year (inclusive).
pub const MIN_PUBLICATION_YEAR: i32 = 1400;

/// Latest accepted publication year (inclusive).
pub const MAX_PUBLICATION_YEAR: i32 = 2026;

/// Genre of a book, drawn from a fixed set of named values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Genre {
    Fiction,
    NonFiction,
    Mystery,
    SciFi,
    Biography,
    Fantasy,
}

impl Genre {
    /// All genres, in declaration order. Used for prompts and help text.
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Mystery,
        Genre::SciFi,
        Genre::Biography,
        Genre::Fantasy,
    ];

    /// The raw name this genre is known by in input and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::NonFiction => "nonFiction",
            Genre::Mystery => "mystery",
            Genre::SciFi => "sciFi",
            Genre::Biography => "biography",
            Genre::Fantasy => "fantasy",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = ();

    /// Parse a raw genre name. Matching is exact: the accepted names are
    /// the ones produced by [`Genre::as_str`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or(())
    }
}

/// A single book record.
///
/// Records are constructed entirely by the caller, identifier included,
/// before being offered to a store. The store keeps a normalized copy on
/// accept; a `Book` held by a caller is never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned at creation and never reused
    pub id: Uuid,

    /// Title; stored trimmed, case preserved
    pub title: String,

    /// Author; stored trimmed, case preserved
    pub author: String,

    /// Publication year. Required for a record to be accepted, but carried
    /// as an `Option` so a missing value is representable before validation.
    pub publication_year: Option<i32>,

    /// Genres, order and multiplicity preserved as given
    pub genres: Vec<Genre>,

    /// Tags; normalized (trimmed, lower-cased, empties dropped) on insert
    pub tags: Vec<String>,
}

impl Book {
    pub fn new(id: Uuid, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            publication_year: None,
            genres: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.publication_year = Some(year);
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}
