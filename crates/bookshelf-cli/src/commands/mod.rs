//! Command handlers for the interactive shell.

mod add;
mod delete;
mod export;
mod list;
mod search;

pub use add::handle_add;
pub use delete::handle_delete;
pub use export::handle_export;
pub use list::handle_list;
pub use search::handle_search;
