//! # Bookshelf Core
//!
//! Core library for Bookshelf - an in-memory personal book collection.
//!
//! This crate provides the record store, data model, and query logic
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **shelf**: Store trait, in-memory implementation, data model, queries
//! - **error**: Closed error taxonomy for all store operations
//!
//! The store is single-threaded and synchronous: every operation completes
//! before returning, and callers that share a shelf across threads must
//! serialize access themselves.

pub mod error;
pub mod shelf;

pub use error::{Result, ShelfError};
pub use shelf::{Book, BookStore, Genre, SearchQuery, Shelf};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
