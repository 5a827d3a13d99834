//! Delete command handler: pick a book by number or id, remove it.

use bookshelf_core::BookStore;

use crate::helpers::parse_delete_target;
use crate::output::print_numbered_list;
use crate::shell::ShellSession;
use crate::ui::{badge, Badge};

pub fn handle_delete<S: BookStore>(session: &mut ShellSession<S>) -> anyhow::Result<()> {
    let books = session.store.list();
    if books.is_empty() {
        println!("{}", badge(&session.ui, Badge::Info, "No books on the shelf"));
        return Ok(());
    }

    print_numbered_list(&session.ui, &books);
    let Some(input) = session.reader.prompt("Book number or id")? else {
        return Ok(());
    };

    let id = match parse_delete_target(&input, &books) {
        Ok(id) => id,
        Err(err) => {
            println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
            return Ok(());
        }
    };

    let title = books
        .iter()
        .find(|book| book.id == id)
        .map(|book| book.title.clone())
        .unwrap_or_else(|| id.to_string());

    match session.store.delete(&id) {
        Ok(()) => {
            println!(
                "{}",
                badge(&session.ui, Badge::Ok, &format!("Deleted \"{}\"", title))
            );
        }
        Err(err) => {
            println!("{}", badge(&session.ui, Badge::Err, &err.to_string()));
        }
    }
    Ok(())
}
