//! Recently used card identifiers.
//!
//! The login form offers the last few card numbers the user typed as quick
//! picks.  [`RecencyList`] keeps them most-recent first, without duplicates,
//! and never holds more than [`RECENCY_CAPACITY`] entries.
//!
//! ```text
//! record_use("B")  on [A]       ->  [B, A]
//! record_use("A")  on [B, A]    ->  [A, B]        promoted, no growth
//! record_use("F")  on [E..A]    ->  [F, E, D, C, B]  oldest evicted
//! ```
//!
//! The list is small enough that a linear scan on every use is the whole
//! algorithm; no index is kept alongside it.

use serde::Serialize;

/// Maximum number of identifiers remembered.
pub const RECENCY_CAPACITY: usize = 5;

/// Bounded most-recently-used list of identifiers.
///
/// Index 0 is the most recent.  Serializes as a plain JSON array of strings.
/// There is no `Deserialize`: persisted arrays come back through
/// [`RecencyList::from_entries`] so they are normalized on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RecencyList {
    entries: Vec<String>,
}

impl RecencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from an arbitrary sequence, most recent first.
    ///
    /// Later duplicates are dropped and the result is truncated to
    /// [`RECENCY_CAPACITY`], so the invariants hold even for a hand-edited or
    /// stale persisted value.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for entry in entries {
            let entry = entry.into();
            if list.entries.len() == RECENCY_CAPACITY {
                break;
            }
            if !list.contains(&entry) {
                list.entries.push(entry);
            }
        }
        list
    }

    /// Records a use of `identifier`, moving it to the front.
    ///
    /// An existing occurrence is removed first, so re-recording promotes
    /// without growing the list.  The oldest entry falls off once the list
    /// is full.
    pub fn record_use(&mut self, identifier: impl Into<String>) {
        let identifier = identifier.into();
        if let Some(pos) = self.entries.iter().position(|e| *e == identifier) {
            self.entries.remove(pos);
        }
        self.entries.insert(0, identifier);
        self.entries.truncate(RECENCY_CAPACITY);
    }

    /// Identifiers, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|e| e == identifier)
    }

    /// Returns `true` when the stored entries already satisfy the invariants.
    pub fn is_normalized(entries: &[String]) -> bool {
        entries.len() <= RECENCY_CAPACITY
            && entries
                .iter()
                .enumerate()
                .all(|(i, e)| !entries[..i].contains(e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<RecencyList> for Vec<String> {
    fn from(list: RecencyList) -> Self {
        list.entries
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(ids: &[&str]) -> RecencyList {
        let mut list = RecencyList::new();
        for id in ids {
            list.record_use(*id);
        }
        list
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_record_use_on_empty_list() {
        let list = recorded(&["card-A"]);
        assert_eq!(list.entries(), ["card-A"]);
    }

    #[test]
    fn test_record_use_prepends_new_identifier() {
        let list = recorded(&["card-A", "card-B"]);
        assert_eq!(list.entries(), ["card-B", "card-A"]);
    }

    #[test]
    fn test_record_existing_identifier_promotes_without_growth() {
        // Arrange
        let mut list = recorded(&["card-A", "card-B"]);

        // Act
        list.record_use("card-A");

        // Assert
        assert_eq!(list.entries(), ["card-A", "card-B"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_sixth_distinct_identifier_evicts_oldest() {
        let list = recorded(&["A", "B", "C", "D", "E", "F"]);
        assert_eq!(list.entries(), ["F", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_promoting_from_full_list_keeps_all_entries() {
        let mut list = recorded(&["A", "B", "C", "D", "E"]);
        list.record_use("A");
        assert_eq!(list.entries(), ["A", "E", "D", "C", "B"]);
    }

    #[test]
    fn test_long_use_sequence_keeps_invariants() {
        // Arrange: a repetitive sequence over eight identifiers
        let ids = ["a", "b", "c", "a", "d", "e", "f", "b", "g", "h", "a", "c"];
        let mut list = RecencyList::new();

        for (step, id) in ids.iter().enumerate() {
            // Act
            list.record_use(*id);

            // Assert
            assert!(list.len() <= RECENCY_CAPACITY, "step {step} over capacity");
            assert!(RecencyList::is_normalized(list.entries()), "step {step} has duplicates");
            assert_eq!(list.entries()[0], *id, "step {step} did not promote");
        }
    }

    #[test]
    fn test_from_entries_drops_duplicates_and_truncates() {
        let list = RecencyList::from_entries(["A", "B", "A", "C", "D", "E", "F", "G"]);
        assert_eq!(list.entries(), ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_is_normalized_detects_violations() {
        let dup = vec!["A".to_string(), "A".to_string()];
        let long: Vec<String> = (0..6).map(|i| i.to_string()).collect();
        assert!(!RecencyList::is_normalized(&dup));
        assert!(!RecencyList::is_normalized(&long));
        assert!(RecencyList::is_normalized(&["A".to_string()]));
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let list = recorded(&["x", "y"]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["y","x"]"#);
    }
}
