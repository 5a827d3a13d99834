//! Text and table output formatting for books.

use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use bookshelf_core::Book;

use crate::ui::{short_id, truncate, UiContext};

const TITLE_WIDTH: usize = 40;

fn year_cell(book: &Book) -> String {
    book.publication_year
        .map(|year| year.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn genres_cell(book: &Book) -> String {
    book.genres
        .iter()
        .map(|genre| genre.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn tags_cell(book: &Book) -> String {
    book.tags.join(", ")
}

/// Print a book collection, one row per book.
///
/// Pretty mode renders a table; plain mode emits one stable
/// pipe-separated line per book.
pub fn print_book_list(ctx: &UiContext, books: &[Book]) {
    if ctx.mode.is_pretty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "TITLE", "AUTHOR", "YEAR", "GENRES", "TAGS"]);
        for book in books {
            table.add_row(vec![
                short_id(&book.id),
                truncate(&book.title, TITLE_WIDTH),
                truncate(&book.author, TITLE_WIDTH),
                year_cell(book),
                genres_cell(book),
                tags_cell(book),
            ]);
        }
        println!("{table}");
    } else {
        for book in books {
            println!(
                "{} | {} | {} | {} | {} | {}",
                short_id(&book.id),
                book.title,
                book.author,
                year_cell(book),
                genres_cell(book),
                tags_cell(book)
            );
        }
    }
}

/// Print a 1-based numbered listing, used when selecting a book to delete.
pub fn print_numbered_list(ctx: &UiContext, books: &[Book]) {
    for (index, book) in books.iter().enumerate() {
        if ctx.mode.is_pretty() {
            println!(
                "{}. {} ({}, id: {})",
                index + 1,
                truncate(&book.title, TITLE_WIDTH),
                book.author,
                short_id(&book.id)
            );
        } else {
            println!(
                "{} | {} | {} | {}",
                index + 1,
                short_id(&book.id),
                book.title,
                book.author
            );
        }
    }
}
