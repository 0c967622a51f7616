//! Insertion-ordered option code to label mapping.

use serde::{Deserialize, Serialize};

/// Ordered mapping from a raw option code to its human-readable label.
///
/// Dictionary option order is meaningful (it is the order the compound
/// columns are generated in), so this is backed by a vector rather than a
/// sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceMap {
    entries: Vec<(String, String)>,
}

impl ChoiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code/label pair, replacing the label of an existing code
    /// in place.
    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        let code = code.into();
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == code) {
            entry.1 = label;
        } else {
            self.entries.push((code, label));
        }
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, label)| label.as_str())
    }

    pub fn contains_code(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(code, label)` pairs in dictionary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, label)| (code.as_str(), label.as_str()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(code, _)| code.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, label)| label.as_str())
    }
}

impl FromIterator<(String, String)> for ChoiceMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code, label) in iter {
            map.insert(code, label);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_insertion_order() {
        let mut map = ChoiceMap::new();
        map.insert("2", "Blue");
        map.insert("10", "Green");
        map.insert("1", "Red");
        let codes: Vec<&str> = map.codes().collect();
        assert_eq!(codes, ["2", "10", "1"]);
    }

    #[test]
    fn insert_replaces_existing_code_in_place() {
        let mut map = ChoiceMap::new();
        map.insert("1", "Red");
        map.insert("2", "Blue");
        map.insert("1", "Crimson");
        assert_eq!(map.get("1"), Some("Crimson"));
        assert_eq!(map.len(), 2);
        assert_eq!(map.codes().next(), Some("1"));
    }
}
