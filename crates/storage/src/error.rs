//! Typed error enum for the storage layer.
//!
//! Lets callers tell a missing row apart from a broken database without
//! downcasting, so the HTTP layer can answer 404 versus 500.

use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// SQL execution or transaction failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// No connection could be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// A stored value could not be read back, e.g. a malformed timestamp.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The blocking task running the query panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Blocking(String),
}

impl StorageError {
    /// Whether this error is a missing-row condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn book_not_found(id: impl ToString) -> Self {
        Self::NotFound { entity: "book", id: id.to_string() }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::FromSqlConversionFailure(column, ty, source) => Self::DataCorruption {
                context: format!("column {column} holds an unreadable {ty} value"),
                source,
            },
            other => Self::Database(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified() {
        let err = StorageError::book_not_found(7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: book with id 7");
    }

    #[test]
    fn conversion_failure_is_data_corruption() {
        let bad = "2024-13-45".parse::<i32>().unwrap_err();
        let err = StorageError::from(rusqlite::Error::FromSqlConversionFailure(
            4,
            rusqlite::types::Type::Text,
            Box::new(bad),
        ));
        assert!(matches!(err, StorageError::DataCorruption { .. }));
        assert_eq!(err.to_string(), "data corruption: column 4 holds an unreadable Text value");
    }

    #[test]
    fn other_sqlite_errors_stay_database_errors() {
        let err = StorageError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, StorageError::Database(_)));
        assert!(!err.is_not_found());
    }
}
