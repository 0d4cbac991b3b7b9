//! Storage layer for webshelf
//!
//! `SQLite` database holding the `books` table and the append-only
//! `history` log. Every book mutation and its history row share one
//! transaction.

mod error;
mod migrations;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use error::StorageError;
pub use storage::Storage;
pub use traits::{BookStore, HistoryStore};
pub use types::{BookListQuery, UpdateOutcome};
