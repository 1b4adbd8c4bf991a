//! Spin history kept by the host.
//!
//! Newest first, bounded. Backed by `im::Vector`, so a view can take a
//! snapshot every frame without copying entries.

use chrono::{Local, NaiveTime};
use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Entries kept by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One settled spin as the host recorded it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// One label per wheel that took part (usually one).
    pub labels: SmallVec<[String; 2]>,
    /// Wall-clock time, `HH:MM`.
    pub time: String,
}

impl HistoryEntry {
    pub fn new<I>(labels: I, time: impl Into<String>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            time: time.into(),
        }
    }

    /// Entry for a single wheel.
    pub fn single(label: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new([label.into()], time)
    }

    /// First recorded label.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

/// Format a time of day the way history entries show it.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Bounded, newest-first list of settled spins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinHistory {
    entries: Vector<HistoryEntry>,
    capacity: usize,
}

impl Default for SpinHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinHistory {
    /// Empty history keeping the last [`DEFAULT_HISTORY_CAPACITY`] spins.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Empty history keeping the last `capacity` spins (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Add an entry at the front, dropping the oldest beyond capacity.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.capacity);
        }
    }

    /// Record a single label at the given time of day.
    pub fn record_label_at(&mut self, label: impl Into<String>, time: NaiveTime) {
        self.record(HistoryEntry::single(label, format_time(time)));
    }

    /// Record a single label at the local wall-clock time.
    pub fn record_now(&mut self, label: impl Into<String>) {
        self.record_label_at(label, Local::now().time());
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cheap copy for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vector<HistoryEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_newest_first() {
        let mut history = SpinHistory::new();
        history.record_label_at("Netflix", at(9, 5));
        history.record_label_at("Game", at(21, 30));

        assert_eq!(history.len(), 2);
        assert_eq!(history.latest().unwrap().label(), Some("Game"));
        assert_eq!(history.latest().unwrap().time, "21:30");
        assert_eq!(history.get(1).unwrap().time, "09:05");
    }

    #[test]
    fn test_capped_at_ten() {
        let mut history = SpinHistory::new();
        for i in 0..15 {
            history.record(HistoryEntry::single(format!("spin {i}"), "12:00"));
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.latest().unwrap().label(), Some("spin 14"));
        assert_eq!(history.get(9).unwrap().label(), Some("spin 5"));
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = SpinHistory::with_capacity(0);
        assert_eq!(history.capacity(), 1);

        history.record(HistoryEntry::single("a", "00:00"));
        history.record(HistoryEntry::single("b", "00:01"));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().label(), Some("b"));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut history = SpinHistory::new();
        history.record(HistoryEntry::single("a", "10:00"));
        let snapshot = history.snapshot();

        history.record(HistoryEntry::single("b", "10:01"));
        history.clear();

        assert_eq!(snapshot.len(), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_multi_label_entry() {
        let entry = HistoryEntry::new(["Draw", "Read a chapter"], "18:45");
        assert_eq!(entry.labels.len(), 2);
        assert_eq!(entry.label(), Some("Draw"));
    }

    #[test]
    fn test_record_now_format() {
        let mut history = SpinHistory::new();
        history.record_now("Rest");

        let time = &history.latest().unwrap().time;
        assert_eq!(time.len(), 5);
        assert_eq!(&time[2..3], ":");
    }
}
