//! Async trait implementations for `SQLite` `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use webshelf_core::{Book, BookFields, BookId, HistoryEntry};

use crate::error::StorageError;
use crate::traits::{BookStore, HistoryStore};
use crate::types::{BookListQuery, UpdateOutcome};
use crate::Storage;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Blocking(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`      — `.clone()` a `&T`, pass as `&arg`
/// - `@opt_str arg`  — `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@val arg`      — move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass val $arg:ident) => { $arg };
}

// ── BookStore ────────────────────────────────────────────────────

#[async_trait]
impl BookStore for Storage {
    async fn list_books(&self, query: &BookListQuery) -> Result<Vec<Book>, StorageError> {
        delegate!(self, list_books, @ref query)
    }
    async fn count_books(&self, filter: Option<&str>) -> Result<u64, StorageError> {
        delegate!(self, count_books, @opt_str filter)
    }
    async fn get_book(&self, id: BookId) -> Result<Book, StorageError> {
        delegate!(self, get_book, @val id)
    }
    async fn insert_book(&self, fields: &BookFields) -> Result<Book, StorageError> {
        delegate!(self, insert_book, @ref fields)
    }
    async fn update_book(
        &self,
        id: BookId,
        fields: &BookFields,
    ) -> Result<UpdateOutcome, StorageError> {
        delegate!(self, update_book, @val id, @ref fields)
    }
    async fn delete_book(&self, id: BookId) -> Result<Book, StorageError> {
        delegate!(self, delete_book, @val id)
    }
}

// ── HistoryStore ─────────────────────────────────────────────────

#[async_trait]
impl HistoryStore for Storage {
    async fn list_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, StorageError> {
        delegate!(self, list_history, @val limit)
    }
}
