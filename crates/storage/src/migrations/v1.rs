//! Migration v1: books and history tables

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    url TEXT NOT NULL,
    currentChapter TEXT NOT NULL DEFAULT '',
    dateCreated TEXT NOT NULL,
    dateUpdated TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    action TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_books_updated ON books(dateUpdated);
CREATE INDEX IF NOT EXISTS idx_history_date ON history(date);
";
