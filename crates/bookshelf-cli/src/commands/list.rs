//! List command handler.

use bookshelf_core::BookStore;

use crate::output::print_book_list;
use crate::shell::ShellSession;
use crate::ui::{badge, Badge};

pub fn handle_list<S: BookStore>(session: &mut ShellSession<S>) -> anyhow::Result<()> {
    let books = session.store.list();
    if books.is_empty() {
        println!("{}", badge(&session.ui, Badge::Info, "No books on the shelf"));
        return Ok(());
    }

    if !session.quiet {
        println!("{} book(s)", books.len());
    }
    print_book_list(&session.ui, &books);
    Ok(())
}
