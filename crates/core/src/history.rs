use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One mutating book operation, as recorded in the activity log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
    Added(String),
    Edited(String),
    Deleted(String),
}

impl HistoryAction {
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Added(_) => "added",
            Self::Edited(_) => "edited",
            Self::Deleted(_) => "deleted",
        }
    }

    /// Stored form, e.g. `added Worm`.
    #[must_use]
    pub fn describe(&self) -> String {
        let (Self::Added(name) | Self::Edited(name) | Self::Deleted(name)) = self;
        format!("{} {name}", self.verb())
    }
}

/// Append-only activity log row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub date: NaiveDateTime,
    pub action: String,
}
