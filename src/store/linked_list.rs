//! Doubly linked list storage.

use std::collections::LinkedList;

use super::{StorageStrategy, StoreError, StrategyKind};

/// Storage backed by a doubly linked sequence.
///
/// Finding a value or a position walks from the head (O(n)); the unlink
/// itself is O(1) once the node is reached.
#[derive(Debug, Clone, Default)]
pub struct LinkedListStore {
    data: LinkedList<i32>,
}

impl LinkedListStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: LinkedList::new(),
        }
    }
}

impl StorageStrategy for LinkedListStore {
    fn insert(&mut self, value: i32) {
        if !self.contains(value) {
            self.data.push_back(value);
        }
    }

    fn remove(&mut self, value: i32) {
        if let Some(position) = self.data.iter().position(|&element| element == value) {
            // split_off walks to the node; the unlink itself is O(1)
            let mut tail = self.data.split_off(position);
            tail.pop_front();
            self.data.append(&mut tail);
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.data.contains(&value)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Result<i32, StoreError> {
        self.data
            .iter()
            .nth(index)
            .copied()
            .ok_or(StoreError::out_of_range(index, self.data.len()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Large
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_and_contains() {
        let mut store = LinkedListStore::new();
        store.insert(42);
        store.insert(7);

        assert_eq!(store.len(), 2);
        assert!(store.contains(42));
        assert!(store.contains(7));
    }

    #[rstest]
    fn test_insert_duplicate_is_noop() {
        let mut store = LinkedListStore::new();
        store.insert(42);
        store.insert(42);

        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[case::head(1, vec![2, 3])]
    #[case::middle(2, vec![1, 3])]
    #[case::tail(3, vec![1, 2])]
    fn test_remove_unlinks_and_preserves_order(#[case] victim: i32, #[case] expected: Vec<i32>) {
        let mut store = LinkedListStore::new();
        store.insert(1);
        store.insert(2);
        store.insert(3);

        store.remove(victim);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), Ok(expected[0]));
        assert_eq!(store.get(1), Ok(expected[1]));
    }

    #[rstest]
    fn test_remove_absent_value_is_noop() {
        let mut store = LinkedListStore::new();
        store.insert(1);
        store.remove(99);

        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_get_walks_from_the_head() {
        let mut store = LinkedListStore::new();
        for value in 10..15 {
            store.insert(value);
        }

        assert_eq!(store.get(0), Ok(10));
        assert_eq!(store.get(4), Ok(14));
        assert_eq!(store.get(5), Err(StoreError::out_of_range(5, 5)));
    }

    #[rstest]
    fn test_kind_and_name() {
        let store = LinkedListStore::new();
        assert_eq!(store.kind(), StrategyKind::Large);
        assert_eq!(store.name(), "linked list");
    }
}
