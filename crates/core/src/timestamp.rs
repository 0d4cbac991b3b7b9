//! Storage format for book and history timestamps.
//!
//! Dates are persisted as zero-padded `YYYY/MM/DD HH:MM:SS` strings so that
//! lexicographic `ORDER BY` on the text column matches chronological order.
//! Everything above the storage boundary works with [`NaiveDateTime`].

use chrono::{Local, NaiveDateTime, Timelike as _};

use crate::error::{CoreError, Result};

pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Current local wall-clock time, truncated to whole seconds.
///
/// Truncation keeps in-memory values equal to what a round trip through
/// storage yields.
#[must_use]
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[must_use]
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| CoreError::InvalidInput(format!("bad timestamp {raw:?}: {e}")))
}
