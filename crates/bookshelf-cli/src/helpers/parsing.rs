//! Parsing helpers turning free text into typed shelf values.

use bookshelf_core::{Book, Genre};
use uuid::Uuid;

use crate::ui::short_id;

fn genre_names() -> String {
    Genre::ALL
        .iter()
        .map(|genre| genre.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a single genre name (exact raw name, surrounding whitespace
/// ignored).
pub fn parse_genre(input: &str) -> anyhow::Result<Genre> {
    let trimmed = input.trim();
    trimmed
        .parse::<Genre>()
        .map_err(|_| anyhow::anyhow!("Unknown genre \"{}\" (use {})", trimmed, genre_names()))
}

/// Parse a comma-separated list of genre names. Empty segments are skipped;
/// an unknown name fails the whole list.
pub fn parse_genres(input: &str) -> anyhow::Result<Vec<Genre>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_genre)
        .collect()
}

/// Split a comma-separated tag list. Segments are trimmed and empties
/// dropped here for display purposes; canonical normalization (lower-casing
/// included) happens in the core on insert.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a publication year field. Blank input means "no year given" and is
/// passed through so the core can report its validation error for a missing
/// year.
pub fn parse_year(input: &str) -> anyhow::Result<Option<i32>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<i32>()
        .map(Some)
        .map_err(|_| anyhow::anyhow!("Invalid year: \"{}\" (expected a number)", trimmed))
}

/// Resolve a delete target against the listed books.
///
/// Accepts a 1-based index into the listing, a full UUID, or a short-id
/// prefix that matches exactly one book.
pub fn parse_delete_target(input: &str, books: &[Book]) -> anyhow::Result<Uuid> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("No book selected"));
    }

    if let Ok(index) = trimmed.parse::<usize>() {
        if index == 0 || index > books.len() {
            return Err(anyhow::anyhow!(
                "Book number out of range: {} (1-{})",
                index,
                books.len()
            ));
        }
        return Ok(books[index - 1].id);
    }

    if let Ok(id) = Uuid::parse_str(trimmed) {
        return Ok(id);
    }

    let matches: Vec<&Book> = books
        .iter()
        .filter(|book| book.id.to_string().starts_with(trimmed))
        .collect();
    match matches.as_slice() {
        [book] => Ok(book.id),
        [] => Err(anyhow::anyhow!("No book matches \"{}\"", trimmed)),
        _ => Err(anyhow::anyhow!(
            "Ambiguous id prefix \"{}\" ({} matches, e.g. {})",
            trimmed,
            matches.len(),
            short_id(&matches[0].id)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn books() -> Vec<Book> {
        // Fixed ids: prefixes must contain letters so the prefix path is
        // exercised rather than the numeric-index path
        let first = Uuid::parse_str("aaaaaaaa-0000-4000-8000-000000000001").unwrap();
        let second = Uuid::parse_str("bbbbbbbb-0000-4000-8000-000000000002").unwrap();
        vec![
            Book::new(first, "One", "A").with_year(2000),
            Book::new(second, "Two", "B").with_year(2001),
        ]
    }

    #[test]
    fn test_parse_genres_trims_and_skips_empty_segments() {
        let genres = parse_genres(" fantasy , sciFi ,, ").unwrap();
        assert_eq!(genres, vec![Genre::Fantasy, Genre::SciFi]);
    }

    #[test]
    fn test_parse_genres_rejects_unknown_names() {
        let err = parse_genres("fantasy, horror").unwrap_err();
        assert!(err.to_string().contains("horror"));
        assert!(err.to_string().contains("nonFiction"));
    }

    #[test]
    fn test_parse_genres_empty_input_is_empty_list() {
        assert!(parse_genres("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tags_keeps_case_for_core_to_normalize() {
        let tags = parse_tags(" Sci-Fi , , FICTION ");
        assert_eq!(tags, vec!["Sci-Fi".to_string(), "FICTION".to_string()]);
    }

    #[test]
    fn test_parse_year_blank_is_missing() {
        assert_eq!(parse_year("  ").unwrap(), None);
        assert_eq!(parse_year("1937").unwrap(), Some(1937));
        assert!(parse_year("ninety").is_err());
    }

    #[test]
    fn test_parse_delete_target_by_index() {
        let books = books();
        assert_eq!(parse_delete_target("2", &books).unwrap(), books[1].id);
        assert!(parse_delete_target("0", &books).is_err());
        assert!(parse_delete_target("3", &books).is_err());
    }

    #[test]
    fn test_parse_delete_target_by_uuid_and_prefix() {
        let books = books();
        let full = books[0].id.to_string();
        assert_eq!(parse_delete_target(&full, &books).unwrap(), books[0].id);
        assert_eq!(parse_delete_target(&full[..8], &books).unwrap(), books[0].id);
        assert!(parse_delete_target("zzzz", &books).is_err());
    }
}
