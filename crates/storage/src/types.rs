//! Storage types shared across modules

use webshelf_core::{Book, Page};

/// Which slice of the book list to read.
///
/// `filter` is a case-insensitive substring of the name; an empty filter
/// matches every book. `page` limits the result to one page of
/// [`webshelf_core::PAGE_SIZE`] rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListQuery {
    pub filter: Option<String>,
    pub page: Option<Page>,
}

impl BookListQuery {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn page(page: Page) -> Self {
        Self { filter: None, page: Some(page) }
    }

    #[must_use]
    pub fn search(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), page: None }
    }

    #[must_use]
    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }
}

/// Result of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Submitted fields matched the stored ones; nothing was written.
    Unchanged,
    Updated(Book),
}

impl UpdateOutcome {
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }
}
