//! Async storage traits
//!
//! Request handlers depend on these instead of the concrete [`crate::Storage`],
//! so the blocking `SQLite` calls stay off the async runtime.

use async_trait::async_trait;
use webshelf_core::{Book, BookFields, BookId, HistoryEntry};

use crate::error::StorageError;
use crate::types::{BookListQuery, UpdateOutcome};

/// Book rows. Every mutation also appends one history entry atomically.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Books ordered by `dateUpdated` descending, filtered and paged per `query`.
    async fn list_books(&self, query: &BookListQuery) -> Result<Vec<Book>, StorageError>;

    /// Number of books whose name contains `filter` (all books if `None`).
    async fn count_books(&self, filter: Option<&str>) -> Result<u64, StorageError>;

    /// Fetch one book, `NotFound` if absent.
    async fn get_book(&self, id: BookId) -> Result<Book, StorageError>;

    /// Insert and return the stored book.
    async fn insert_book(&self, fields: &BookFields) -> Result<Book, StorageError>;

    /// Edit a book; unchanged fields short-circuit without writing.
    async fn update_book(
        &self,
        id: BookId,
        fields: &BookFields,
    ) -> Result<UpdateOutcome, StorageError>;

    /// Delete and return the removed book.
    async fn delete_book(&self, id: BookId) -> Result<Book, StorageError>;
}

/// Read access to the append-only activity log.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Newest first; `None` means unbounded.
    async fn list_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, StorageError>;
}
