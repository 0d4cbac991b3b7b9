use rusqlite::{Connection, OptionalExtension as _, TransactionBehavior, params};
use webshelf_core::timestamp::{self, format_timestamp};
use webshelf_core::{Book, BookFields, BookId, HistoryAction, PAGE_SIZE};

use super::history::append_history;
use super::{Storage, get_conn, get_timestamp};
use crate::error::StorageError;
use crate::types::{BookListQuery, UpdateOutcome};

const BOOK_COLUMNS: &str = "id, name, url, currentChapter, dateCreated, dateUpdated";

/// The closed set of list statements. Selected by shape of the query,
/// never assembled from caller-provided SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListVariant {
    All,
    Paged,
    Filtered,
    FilteredPaged,
}

impl ListVariant {
    fn of(query: &BookListQuery) -> Self {
        match (needle(query.filter.as_deref()).is_some(), query.page.is_some()) {
            (false, false) => Self::All,
            (false, true) => Self::Paged,
            (true, false) => Self::Filtered,
            (true, true) => Self::FilteredPaged,
        }
    }

    const fn sql(self) -> &'static str {
        match self {
            Self::All => {
                "SELECT id, name, url, currentChapter, dateCreated, dateUpdated FROM books
                 ORDER BY dateUpdated DESC, id DESC"
            },
            Self::Paged => {
                "SELECT id, name, url, currentChapter, dateCreated, dateUpdated FROM books
                 ORDER BY dateUpdated DESC, id DESC
                 LIMIT ?1 OFFSET ?2"
            },
            Self::Filtered => {
                "SELECT id, name, url, currentChapter, dateCreated, dateUpdated FROM books
                 WHERE instr(unicode_lower(name), ?1) > 0
                 ORDER BY dateUpdated DESC, id DESC"
            },
            Self::FilteredPaged => {
                "SELECT id, name, url, currentChapter, dateCreated, dateUpdated FROM books
                 WHERE instr(unicode_lower(name), ?1) > 0
                 ORDER BY dateUpdated DESC, id DESC
                 LIMIT ?2 OFFSET ?3"
            },
        }
    }
}

/// Lowercased search term, matched with `instr` so `%` and `_` stay literal.
/// An empty filter matches every book and is treated as no filter.
fn needle(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(str::to_lowercase)
}

fn map_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: BookId::new(row.get(0)?),
        fields: BookFields {
            name: row.get(1)?,
            url: row.get(2)?,
            current_chapter: row.get(3)?,
        },
        date_created: get_timestamp(row, 4)?,
        date_updated: get_timestamp(row, 5)?,
    })
}

fn fetch_book(conn: &Connection, id: BookId) -> Result<Book, StorageError> {
    conn.query_row(
        &format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?1"),
        params![id.get()],
        map_book,
    )
    .optional()?
    .ok_or_else(|| StorageError::book_not_found(id))
}

impl Storage {
    /// List books, most recently updated first.
    ///
    /// # Errors
    /// Returns error if the query or any row conversion fails; no partial list
    /// is returned.
    pub fn list_books(&self, query: &BookListQuery) -> Result<Vec<Book>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let variant = ListVariant::of(query);
        let mut stmt = conn.prepare_cached(variant.sql())?;

        let limit = i64::from(PAGE_SIZE);
        let offset = query.page.map_or(0, |p| p.offset(PAGE_SIZE)) as i64;
        let pattern = needle(query.filter.as_deref()).unwrap_or_default();

        let rows = match variant {
            ListVariant::All => stmt.query_map([], map_book)?,
            ListVariant::Paged => stmt.query_map(params![limit, offset], map_book)?,
            ListVariant::Filtered => stmt.query_map(params![pattern], map_book)?,
            ListVariant::FilteredPaged => {
                stmt.query_map(params![pattern, limit, offset], map_book)?
            },
        };
        let books = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(?variant, count = books.len(), "listed books");
        Ok(books)
    }

    /// Count books matching an optional name filter.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_books(&self, filter: Option<&str>) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = match needle(filter) {
            Some(n) => conn.query_row(
                "SELECT COUNT(*) FROM books WHERE instr(unicode_lower(name), ?1) > 0",
                params![n],
                |row| row.get(0),
            )?,
            None => conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?,
        };
        Ok(count as u64)
    }

    /// Fetch one book.
    ///
    /// # Errors
    /// Returns [`StorageError::NotFound`] if no book has this id.
    pub fn get_book(&self, id: BookId) -> Result<Book, StorageError> {
        let conn = get_conn(&self.pool)?;
        fetch_book(&conn, id)
    }

    /// Insert a book together with its `added` history row.
    ///
    /// # Errors
    /// Returns error if either insert fails; neither row is kept in that case.
    pub fn insert_book(&self, fields: &BookFields) -> Result<Book, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let now = timestamp::now();
        let stamp = format_timestamp(&now);

        tx.execute(
            "INSERT INTO books (name, url, currentChapter, dateCreated, dateUpdated)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![fields.name, fields.url, fields.current_chapter, stamp],
        )?;
        let id = BookId::new(tx.last_insert_rowid());
        append_history(&tx, &now, &HistoryAction::Added(fields.name.clone()))?;
        tx.commit()?;

        tracing::info!(book_id = %id, name = %fields.name, "book added");
        Ok(Book { id, fields: fields.clone(), date_created: now, date_updated: now })
    }

    /// Apply an edit. Identical fields are a no-op: no write, no history row,
    /// `dateUpdated` untouched.
    ///
    /// # Errors
    /// Returns [`StorageError::NotFound`] for an unknown id, or a database
    /// error, in which case neither the book nor the history is changed.
    pub fn update_book(
        &self,
        id: BookId,
        fields: &BookFields,
    ) -> Result<UpdateOutcome, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        // Write lock before the read; a deferred read-then-write gets SQLITE_BUSY under WAL.
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let stored = fetch_book(&tx, id)?;

        if stored.fields == *fields {
            tracing::debug!(book_id = %id, "edit left book unchanged");
            return Ok(UpdateOutcome::Unchanged);
        }

        let now = timestamp::now().max(stored.date_created);
        tx.execute(
            "UPDATE books SET name = ?1, url = ?2, currentChapter = ?3, dateUpdated = ?4
             WHERE id = ?5",
            params![
                fields.name,
                fields.url,
                fields.current_chapter,
                format_timestamp(&now),
                id.get()
            ],
        )?;
        append_history(&tx, &now, &HistoryAction::Edited(fields.name.clone()))?;
        tx.commit()?;

        tracing::info!(book_id = %id, name = %fields.name, "book edited");
        Ok(UpdateOutcome::Updated(Book {
            id,
            fields: fields.clone(),
            date_created: stored.date_created,
            date_updated: now,
        }))
    }

    /// Delete a book and log it under the name it had right before deletion.
    ///
    /// # Errors
    /// Returns [`StorageError::NotFound`] for an unknown id.
    pub fn delete_book(&self, id: BookId) -> Result<Book, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let stored = fetch_book(&tx, id)?;

        tx.execute("DELETE FROM books WHERE id = ?1", params![id.get()])?;
        append_history(&tx, &timestamp::now(), &HistoryAction::Deleted(stored.name().to_owned()))?;
        tx.commit()?;

        tracing::info!(book_id = %id, name = %stored.name(), "book deleted");
        Ok(stored)
    }
}
