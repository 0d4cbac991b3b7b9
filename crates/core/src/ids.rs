use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Reject anything that is not a plain run of ASCII digits.
///
/// `str::parse` alone would accept a leading `+`.
fn parse_positive<T: std::str::FromStr>(raw: &str, what: &str) -> Result<T> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidInput(format!("{what} must be a positive integer, got {raw:?}")));
    }
    raw.parse::<T>()
        .map_err(|_| CoreError::InvalidInput(format!("{what} out of range: {raw:?}")))
}

/// Storage-assigned book identifier. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Wrap a rowid read back from storage.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse a path segment. Zero, negatives and non-digits are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        let id: i64 = parse_positive(raw, "book id")?;
        if id < 1 {
            return Err(CoreError::InvalidInput(format!("book id must be >= 1, got {id}")));
        }
        Ok(Self(id))
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 1-indexed page of the book listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(NonZeroU32);

impl Page {
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    #[must_use]
    pub const fn number(self) -> u32 {
        self.0.get()
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let number: u32 = parse_positive(raw, "page")?;
        NonZeroU32::new(number)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidInput("page must be >= 1".to_owned()))
    }

    /// Row offset of this page for the given page size.
    #[must_use]
    pub const fn offset(self, page_size: u32) -> u64 {
        (self.0.get() as u64 - 1) * page_size as u64
    }

    #[must_use]
    pub fn prev(self) -> Option<Self> {
        NonZeroU32::new(self.0.get() - 1).map(Self)
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_id_accepts_digits() {
        assert_eq!(BookId::parse("42").unwrap().get(), 42);
        assert_eq!(BookId::parse("007").unwrap().get(), 7);
    }

    #[test]
    fn book_id_rejects_malformed() {
        for raw in ["", "0", "-1", "+3", "abc", "4a", " 4", "99999999999999999999"] {
            assert!(BookId::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn page_offsets() {
        assert_eq!(Page::FIRST.offset(10), 0);
        assert_eq!(Page::parse("3").unwrap().offset(10), 20);
    }

    #[test]
    fn page_rejects_zero_and_garbage() {
        assert!(Page::parse("0").is_err());
        assert!(Page::parse("two").is_err());
        assert!(Page::parse("").is_err());
    }

    #[test]
    fn page_neighbours() {
        assert_eq!(Page::FIRST.prev(), None);
        let second = Page::FIRST.next().unwrap();
        assert_eq!(second.number(), 2);
        assert_eq!(second.prev(), Some(Page::FIRST));
    }
}
