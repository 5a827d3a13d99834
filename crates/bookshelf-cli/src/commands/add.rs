//! Add command handler: prompt for fields, build a record, offer it to the
//! store.

use uuid::Uuid;

use bookshelf_core::{Book, BookStore, Genre};

use crate::helpers::{parse_genres, parse_tags, parse_year};
use crate::shell::ShellSession;
use crate::ui::theme::{styled, styles};
use crate::ui::{badge, short_id, Badge};

fn genre_prompt() -> String {
    let names = Genre::ALL
        .iter()
        .map(|genre| genre.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Genres, comma-separated ({})", names)
}

pub fn handle_add<S: BookStore>(session: &mut ShellSession<S>) -> anyhow::Result<()> {
    let Some(title) = session.reader.prompt("Title")? else {
        return Ok(());
    };
    let Some(author) = session.reader.prompt("Author")? else {
        return Ok(());
    };
    let Some(year_input) = session.reader.prompt("Publication year")? else {
        return Ok(());
    };
    // A blank year is passed through as missing so the store reports its
    // own validation error for it.
    let year = match parse_year(&year_input) {
        Ok(year) => year,
        Err(err) => {
            println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
            return Ok(());
        }
    };

    let Some(genre_input) = session.reader.prompt(&genre_prompt())? else {
        return Ok(());
    };
    let genres = match parse_genres(&genre_input) {
        Ok(genres) => genres,
        Err(err) => {
            println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
            return Ok(());
        }
    };

    let Some(tag_input) = session.reader.prompt("Tags, comma-separated")? else {
        return Ok(());
    };

    let mut book = Book::new(Uuid::new_v4(), title, author)
        .with_genres(genres)
        .with_tags(parse_tags(&tag_input));
    if let Some(year) = year {
        book = book.with_year(year);
    }

    let id = book.id;
    let title = book.title.trim().to_string();
    match session.store.add(book) {
        Ok(()) => {
            println!(
                "{}",
                badge(&session.ui, Badge::Ok, &format!("Added \"{}\"", title))
            );
            if !session.quiet {
                let context = format!("ID: {}", short_id(&id));
                println!("{}", styled(&context, styles::dim(), session.ui.color));
            }
        }
        Err(err) => {
            println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
        }
    }
    Ok(())
}
