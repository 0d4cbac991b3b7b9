//! `SQLite` storage implementation
//!
//! All methods are synchronous; [`crate::traits`] wraps them for async callers.

// SQLite uses i64 for counts/limits, Rust uses usize/u64 - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod books;
mod history;

use chrono::NaiveDateTime;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use std::path::Path;
use webshelf_core::timestamp::parse_timestamp;
use webshelf_core::{DEFAULT_DB_POOL_SIZE, ENV_DB_POOL_SIZE, env_parse_with_default};

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Process-wide storage handle. Cheap to clone; clones share the pool.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Read a timestamp column, surfacing bad text as a row conversion error.
pub(crate) fn get_timestamp(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(idx)?;
    parse_timestamp(&raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// SQL name of the full-Unicode lowercase function; the builtin `lower()`
/// and `LIKE` only fold ASCII.
const UNICODE_LOWER: &str = "unicode_lower";

/// Per-connection settings; the storage engine serializes writers.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 5000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    conn.create_scalar_function(
        UNICODE_LOWER,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| Ok(ctx.get::<Option<String>>(0)?.map(|s| s.to_lowercase())),
    )
}

fn db_pool_size() -> u32 {
    env_parse_with_default(ENV_DB_POOL_SIZE, DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (or create) the database file and ensure the schema exists.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or schema creation fails.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(
            pool_size = pool_size,
            path = %db_path.display(),
            "Storage initialized with connection pool"
        );

        Ok(Self { pool })
    }
}
