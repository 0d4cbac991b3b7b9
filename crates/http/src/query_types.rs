//! Request/query types (Deserialize)

use serde::Deserialize;
use webshelf_core::{BookFields, BookId, CoreError, Page};

/// `?page=N` on the index. Kept as raw text so a malformed value is a 400
/// from our own parser instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Absent means the first page; present but malformed is an error.
    pub fn page(&self) -> Result<Page, CoreError> {
        self.page.as_deref().map_or(Ok(Page::FIRST), Page::parse)
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Add/edit form body. Field names are the ones the page's forms submit.
#[derive(Debug, Deserialize)]
pub struct BookForm {
    #[serde(rename = "bookName", default)]
    pub name: String,
    #[serde(rename = "bookUrl", default)]
    pub url: String,
    #[serde(rename = "bookChapter", default)]
    pub chapter: String,
}

impl BookForm {
    /// Trimmed, validated fields ready for storage.
    pub fn into_fields(self) -> Result<BookFields, CoreError> {
        let fields = BookFields::new(self.name, self.url, self.chapter).trimmed();
        fields.validate()?;
        Ok(fields)
    }
}

/// Parse the `{id}` path segment.
pub fn parse_book_id(raw: &str) -> Result<BookId, CoreError> {
    BookId::parse(raw)
}
