use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::color::{ColorTag, color_for};
use crate::error::{CoreError, Result};
use crate::ids::BookId;

/// User-editable part of a book.
///
/// Edits compare the submitted value against the stored one with `==`;
/// equal values skip the write entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFields {
    pub name: String,
    pub url: String,
    pub current_chapter: String,
}

impl BookFields {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        current_chapter: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), url: url.into(), current_chapter: current_chapter.into() }
    }

    /// Trim surrounding whitespace from every field.
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            url: self.url.trim().to_owned(),
            current_chapter: self.current_chapter.trim().to_owned(),
        }
    }

    /// Name and URL are required; the chapter marker may be empty.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("book name must not be empty".to_owned()));
        }
        if self.url.trim().is_empty() {
            return Err(CoreError::InvalidInput("book url must not be empty".to_owned()));
        }
        Ok(())
    }
}

/// A tracked serialized work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(flatten)]
    pub fields: BookFields,
    pub date_created: NaiveDateTime,
    pub date_updated: NaiveDateTime,
}

impl Book {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.fields.name
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.fields.url
    }

    #[must_use]
    pub fn current_chapter(&self) -> &str {
        &self.fields.current_chapter
    }

    /// Derived from the URL host on every call; never persisted.
    #[must_use]
    pub fn color(&self) -> ColorTag {
        color_for(&self.fields.url)
    }
}
