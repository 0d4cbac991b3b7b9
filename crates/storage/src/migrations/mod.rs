mod v1;

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 1;

/// Create the schema if absent. Safe to run on every start.
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!("Database schema version: {} (target: {})", current_version, SCHEMA_VERSION);

    // v1 is all CREATE ... IF NOT EXISTS, so databases written by older
    // builds that never set user_version are picked up as they are.
    if current_version < 1i32 {
        tracing::info!("Running migration v1: books and history tables");
        conn.execute_batch(v1::SQL)?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
