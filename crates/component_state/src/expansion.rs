//! Expanded-row key set and row-key integrity checks.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::error::TableError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Keys of the rows whose detail panel is open.
pub struct ExpandedKeys<K: Eq + Hash> {
    keys: HashSet<K>,
}

impl<K: Eq + Hash> Default for ExpandedKeys<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> ExpandedKeys<K> {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` is expanded.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Set with `key` flipped; every other key is untouched.
    pub fn toggled(&self, key: &K) -> Self {
        let mut next = self.clone();
        next.toggle(key.clone());
        next
    }

    /// Flips `key` in place. Returns whether it is now expanded.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Number of expanded keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Borrowed key set.
    pub fn as_set(&self) -> &HashSet<K> {
        &self.keys
    }

    /// Owned key set, as handed to change callbacks.
    pub fn into_set(self) -> HashSet<K> {
        self.keys
    }
}

impl<K: Eq + Hash> From<HashSet<K>> for ExpandedKeys<K> {
    fn from(keys: HashSet<K>) -> Self {
        Self { keys }
    }
}

impl<K: Eq + Hash> FromIterator<K> for ExpandedKeys<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Finds the first pair of rows sharing a key.
///
/// # Errors
///
/// Returns [`TableError::DuplicateRowKey`] naming both row indices.
pub fn check_unique_keys<R, K: Eq + Hash>(
    rows: &[R],
    key_of: impl Fn(&R) -> K,
) -> Result<(), TableError> {
    let mut seen = HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if let Some(first) = seen.insert(key_of(row), index) {
            return Err(TableError::DuplicateRowKey {
                first,
                second: index,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggling_one_key_leaves_others_alone() {
        let keys: ExpandedKeys<u32> = [1, 2].into_iter().collect();

        let next = keys.toggled(&1);
        assert!(!next.contains(&1));
        assert!(next.contains(&2));

        let again = next.toggled(&3);
        assert!(again.contains(&2));
        assert!(again.contains(&3));
        assert_eq!(again.len(), 2);
    }

    #[test]
    fn toggle_reports_new_membership() {
        let mut keys = ExpandedKeys::new();
        assert!(keys.toggle("a"));
        assert!(!keys.toggle("a"));
        assert!(keys.is_empty());
    }

    #[test]
    fn duplicate_keys_are_reported() {
        let rows = [(1, "x"), (2, "y"), (1, "z")];
        assert_eq!(
            check_unique_keys(&rows, |row| row.0),
            Err(TableError::DuplicateRowKey {
                first: 0,
                second: 2
            })
        );
        assert_eq!(check_unique_keys(&rows, |row| row.1), Ok(()));
    }
}
