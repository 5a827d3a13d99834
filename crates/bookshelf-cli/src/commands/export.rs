//! Export command handler: dump the collection as JSON to stdout.

use bookshelf_core::BookStore;

use crate::output::books_json;
use crate::shell::ShellSession;

pub fn handle_export<S: BookStore>(session: &mut ShellSession<S>) -> anyhow::Result<()> {
    let books = session.store.list();
    println!("{}", books_json(&books)?);
    Ok(())
}
