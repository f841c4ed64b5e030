//! Bounded log of completed calculations.

use std::collections::VecDeque;
use std::fmt;

/// Number of entries kept before the oldest is evicted.
pub const HISTORY_LIMIT: usize = 10;

/// One completed calculation, e.g. `5 + 3 = 8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Left operand, operation and right operand as typed (`"5 + 3"`).
    /// An omitted right operand leaves a trailing space (`"5 + "`).
    pub expression: String,
    /// The formatted result.
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Most-recent-last log holding at most [`HISTORY_LIMIT`] entries.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest once the limit is exceeded.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > HISTORY_LIMIT {
            self.entries.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
