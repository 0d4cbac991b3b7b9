use chrono::NaiveDateTime;
use rusqlite::{Connection, params};
use webshelf_core::timestamp::format_timestamp;
use webshelf_core::{HistoryAction, HistoryEntry};

use super::{Storage, get_conn, get_timestamp};
use crate::error::StorageError;

/// Append a history row on `conn`, which is expected to be the transaction
/// carrying the book mutation being logged.
pub(crate) fn append_history(
    conn: &Connection,
    at: &NaiveDateTime,
    action: &HistoryAction,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "INSERT INTO history (date, action) VALUES (?1, ?2)",
        params![format_timestamp(at), action.describe()],
    )?;
    Ok(())
}

fn map_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    Ok(HistoryEntry { id: row.get(0)?, date: get_timestamp(row, 1)?, action: row.get(2)? })
}

impl Storage {
    /// Newest history first, optionally capped to `limit` entries.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let entries = match limit {
            Some(limit) => {
                let mut stmt = conn.prepare_cached(
                    "SELECT id, date, action FROM history ORDER BY date DESC, id DESC LIMIT ?1",
                )?;
                stmt.query_map(params![limit as i64], map_entry)?
                    .collect::<rusqlite::Result<Vec<_>>>()?
            },
            None => {
                let mut stmt = conn.prepare_cached(
                    "SELECT id, date, action FROM history ORDER BY date DESC, id DESC",
                )?;
                stmt.query_map([], map_entry)?.collect::<rusqlite::Result<Vec<_>>>()?
            },
        };
        Ok(entries)
    }
}
