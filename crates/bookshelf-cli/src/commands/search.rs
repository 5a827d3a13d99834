//! Search command handler: map prompted text to a typed query.

use bookshelf_core::{BookStore, SearchQuery};

use crate::helpers::{parse_genre, parse_year};
use crate::output::print_book_list;
use crate::shell::ShellSession;
use crate::ui::{badge, Badge};

pub fn handle_search<S: BookStore>(session: &mut ShellSession<S>) -> anyhow::Result<()> {
    let Some(kind_input) = session
        .reader
        .prompt("Search by (title, author, genre, tag, year)")?
    else {
        return Ok(());
    };
    let kind = kind_input.trim().to_lowercase();

    let Some(value) = session.reader.prompt("Query")? else {
        return Ok(());
    };

    let query = match kind.as_str() {
        "title" => SearchQuery::Title(value),
        "author" => SearchQuery::Author(value),
        "tag" => SearchQuery::Tag(value),
        "genre" => match parse_genre(&value) {
            Ok(genre) => SearchQuery::Genre(genre),
            Err(err) => {
                println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
                return Ok(());
            }
        },
        "year" => match parse_year(&value) {
            Ok(Some(year)) => SearchQuery::Year(year),
            Ok(None) => {
                println!("{}", badge(&session.ui, Badge::Err, "No year given"));
                return Ok(());
            }
            Err(err) => {
                println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
                return Ok(());
            }
        },
        other => {
            println!(
                "{}",
                badge(
                    &session.ui,
                    Badge::Err,
                    &format!(
                        "Unknown search kind \"{}\" (use title, author, genre, tag, or year)",
                        other
                    ),
                )
            );
            return Ok(());
        }
    };

    match session.store.search(&query) {
        Ok(books) if books.is_empty() => {
            println!("{}", badge(&session.ui, Badge::Info, "No matches"));
        }
        Ok(books) => {
            if !session.quiet {
                println!("Found {} book(s)", books.len());
            }
            print_book_list(&session.ui, &books);
        }
        Err(err) => {
            println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
        }
    }
    Ok(())
}
