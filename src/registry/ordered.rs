//! Insertion-ordered keyed storage
//!
//! A hash index over an append-only vector. Iteration follows insertion
//! order; entries are never removed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Keyed entries iterated in the order they were first inserted.
#[derive(Debug, Clone)]
pub struct OrderedRegistry<V> {
    index: HashMap<String, usize>,
    entries: Vec<V>,
}

impl<V> OrderedRegistry<V> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// Returns the rejected value if `key` is already present; the stored
    /// entry is left untouched.
    pub fn insert(&mut self, key: String, value: V) -> Result<(), V> {
        match self.index.entry(key) {
            Entry::Occupied(_) => Err(value),
            Entry::Vacant(slot) => {
                slot.insert(self.entries.len());
                self.entries.push(value);
                Ok(())
            }
        }
    }

    /// Returns the entry for `key`, creating it with `make` on first use
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.to_owned(), position);
                self.entries.push(make());
                position
            }
        };
        &mut self.entries[position]
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&i) => Some(&mut self.entries[i]),
            None => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.entries.iter()
    }
}

impl<V> Default for OrderedRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut registry = OrderedRegistry::new();
        for key in ["11788", "10103", "98765", "10115"] {
            registry.insert(key.to_string(), key.to_string()).unwrap();
        }

        let order: Vec<&str> = registry.iter().map(String::as_str).collect();
        assert_eq!(order, vec!["11788", "10103", "98765", "10115"]);
    }

    #[test]
    fn test_duplicate_insert_is_rejected_and_original_kept() {
        let mut registry = OrderedRegistry::new();
        registry.insert("10103".to_string(), "Baldwin").unwrap();

        assert_eq!(registry.insert("10103".to_string(), "Imposter"), Err("Imposter"));
        assert_eq!(registry.get("10103"), Some(&"Baldwin"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_or_insert_with_reuses_existing() {
        let mut registry: OrderedRegistry<Vec<u32>> = OrderedRegistry::new();
        registry.get_or_insert_with("SFEN", Vec::new).push(1);
        registry.get_or_insert_with("SYEN", Vec::new).push(2);
        registry.get_or_insert_with("SFEN", Vec::new).push(3);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("SFEN"), Some(&vec![1, 3]));
    }

    #[test]
    fn test_get_mut_and_missing() {
        let mut registry = OrderedRegistry::new();
        registry.insert("a".to_string(), 1).unwrap();
        *registry.get_mut("a").unwrap() += 1;

        assert_eq!(registry.get("a"), Some(&2));
        assert!(registry.get_mut("b").is_none());
        assert!(!registry.contains("b"));
        assert!(!registry.is_empty());
    }
}
