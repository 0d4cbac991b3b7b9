//! Test utilities and module declarations for storage tests.

use crate::Storage;
use tempfile::TempDir;
use webshelf_core::BookFields;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn create_test_fields(name: &str) -> BookFields {
    BookFields::new(
        name,
        format!("https://www.royalroad.com/fiction/{}", name.len()),
        "1",
    )
}

/// Count rows in a table through a raw pooled connection.
#[expect(clippy::unwrap_used, reason = "test code")]
pub fn count_rows(storage: &Storage, table: &str) -> i64 {
    let conn = storage.pool.get().unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0)).unwrap()
}

mod async_tests;
