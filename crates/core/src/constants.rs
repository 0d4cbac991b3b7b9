//! Shared constants for webshelf.

/// Number of books shown per page on the index.
pub const PAGE_SIZE: u32 = 10;

/// Number of history entries in the compact activity panel.
pub const RECENT_HISTORY_LIMIT: usize = 5;

/// Default connection pool size for the `SQLite` storage.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// Env var overriding the connection pool size.
pub const ENV_DB_POOL_SIZE: &str = "WEBSHELF_DB_POOL_SIZE";

/// Env var overriding the database file location.
pub const ENV_DB_PATH: &str = "WEBSHELF_DB_PATH";
