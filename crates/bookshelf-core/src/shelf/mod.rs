//! Shelf module: store contract, in-memory implementation, and data model.
//!
//! - **types**: `Book` record and the closed `Genre` enumeration
//! - **query**: Typed `SearchQuery` with one variant per search kind
//! - **traits**: The `BookStore` contract the CLI programs against
//! - **memory**: `Shelf`, the in-memory ordered store

mod memory;
mod query;
mod traits;
mod types;

pub use memory::Shelf;
pub use query::SearchQuery;
pub use traits::BookStore;
pub use types::{Book, Genre, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR};
