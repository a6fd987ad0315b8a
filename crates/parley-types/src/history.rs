//! History entry formatting and the snapshot model.
//!
//! An entry is a single formatted line, `"<sender>: <text>"`, built exactly
//! once at post time. There is no separate identity or timestamp field;
//! position in the history is the only temporal signal.

use serde::{Deserialize, Serialize};

/// Separator between sender and text in a formatted entry.
pub const ENTRY_SEPARATOR: &str = ": ";

/// Format one history entry from its sender and text.
///
/// Any strings are accepted, including empty ones.
pub fn format_entry(sender: &str, text: &str) -> String {
    format!("{sender}{ENTRY_SEPARATOR}{text}")
}

/// An immutable copy of the history at a point in time.
///
/// Every store operation hands one of these back. Callers never see a
/// reference to live store state, so later posts cannot change a snapshot
/// already returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot(Vec<String>);

impl Snapshot {
    /// Wrap an already-copied entry sequence.
    pub fn new(entries: Vec<String>) -> Self {
        Self(entries)
    }

    /// Number of entries in this snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries in history order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Borrow the entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consume the snapshot, yielding the owned entry sequence.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry("alice", "hi"), "alice: hi");
    }

    #[test]
    fn test_format_entry_accepts_empty_strings() {
        assert_eq!(format_entry("", ""), ": ");
        assert_eq!(format_entry("bob", ""), "bob: ");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::default();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }

    #[test]
    fn test_snapshot_preserves_order() {
        let snapshot = Snapshot::new(vec!["a: 1".to_string(), "b: 2".to_string()]);
        let entries: Vec<&String> = snapshot.iter().collect();
        assert_eq!(entries, ["a: 1", "b: 2"]);
        assert_eq!(snapshot.into_inner(), vec!["a: 1", "b: 2"]);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = Snapshot::new(vec!["alice: hi".to_string()]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, "[\"alice: hi\"]");
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
