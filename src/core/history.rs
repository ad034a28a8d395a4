//! Completed-calculation history.
//!
//! The engine hands every finished calculation to a [`HistorySink`].
//! [`History`] is the bounded in-memory sink: newest entry first, oldest
//! evicted once the capacity is reached. Entries are immutable values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Default number of retained entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Record of a single completed calculation.
///
/// # Example
///
/// ```rust
/// use abacus::core::HistoryEntry;
///
/// let entry = HistoryEntry::new("12 + 4", "16");
/// assert_eq!(entry.expression, "12 + 4");
/// assert_eq!(entry.result, "16");
/// assert_eq!(entry.display(), "12 + 4 = 16");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Opaque unique identifier
    pub id: String,
    /// Expression without the trailing `=`
    pub expression: String,
    /// Result literal, or the error token
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression: expression.into(),
            result: result.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Append-only receiver of completed calculations.
///
/// `append` is synchronous from the engine's point of view and must not
/// mutate the entry after accepting it.
pub trait HistorySink {
    fn append(&mut self, entry: HistoryEntry);
}

impl<H: HistorySink + ?Sized> HistorySink for &mut H {
    fn append(&mut self, entry: HistoryEntry) {
        (**self).append(entry);
    }
}

/// Unbounded sink, oldest first.
impl HistorySink for Vec<HistoryEntry> {
    fn append(&mut self, entry: HistoryEntry) {
        self.push(entry);
    }
}

/// Bounded history, newest entry first.
///
/// # Example
///
/// ```rust
/// use abacus::core::{History, HistoryEntry, HistorySink};
///
/// let mut history = History::with_capacity(2);
/// history.append(HistoryEntry::new("1 + 1", "2"));
/// history.append(HistoryEntry::new("2 + 2", "4"));
/// history.append(HistoryEntry::new("3 + 3", "6"));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.latest().unwrap().result, "6");
/// assert_eq!(history.get(1).unwrap().result, "4");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

/// Wire shape of a [`History`]; decoding re-applies the capacity.
#[derive(Deserialize)]
struct StoredHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl From<StoredHistory> for History {
    fn from(stored: StoredHistory) -> Self {
        Self::from_entries(stored.entries, stored.capacity)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history retaining at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    /// Entry at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn find(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Entries from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialize entries, newest first.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Load entries stored newest first, keeping at most `capacity`.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries, capacity))
    }

    fn from_entries(entries: Vec<HistoryEntry>, capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        history
            .entries
            .extend(entries.into_iter().take(history.capacity));
        history
    }

    /// Change the capacity (minimum 1), evicting the oldest entries that
    /// no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.entries.truncate(self.capacity);
    }
}

impl HistorySink for History {
    fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }
}
