//! Growable array storage.

use super::{StorageStrategy, StoreError, StrategyKind};

/// Storage backed by a growable contiguous buffer.
///
/// Removal shifts the tail left, preserving the relative order of the
/// remaining elements at O(n) cost.
#[derive(Debug, Clone, Default)]
pub struct DynamicArrayStore {
    data: Vec<i32>,
}

impl DynamicArrayStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }
}

impl StorageStrategy for DynamicArrayStore {
    fn insert(&mut self, value: i32) {
        if !self.contains(value) {
            self.data.push(value);
        }
    }

    fn remove(&mut self, value: i32) {
        if let Some(position) = self.data.iter().position(|&element| element == value) {
            self.data.remove(position);
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
            .get(index)
            .copied()
            .ok_or(StoreError::out_of_range(index, self.data.len()))
    }

    fn kind(&self) -> StrategyKind {
        StrategyKind::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insert_and_contains() {
        let mut store = DynamicArrayStore::new();
        store.insert(42);
        store.insert(7);

        assert_eq!(store.len(), 2);
        assert!(store.contains(42));
        assert!(store.contains(7));
    }

    #[rstest]
    fn test_insert_duplicate_is_noop() {
        let mut store = DynamicArrayStore::new();
        store.insert(42);
        store.insert(42);

        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_remove_preserves_relative_order() {
        let mut store = DynamicArrayStore::new();
        store.insert(1);
        store.insert(2);
        store.insert(3);

        store.remove(2);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), Ok(1));
        assert_eq!(store.get(1), Ok(3));
    }

    #[rstest]
    fn test_remove_absent_value_is_noop() {
        let mut store = DynamicArrayStore::new();
        store.insert(1);
        store.remove(99);

        assert_eq!(store.len(), 1);
    }

    #[rstest]
    fn test_get_out_of_range() {
        let mut store = DynamicArrayStore::new();
        store.insert(1);

        assert_eq!(store.get(1), Err(StoreError::out_of_range(1, 1)));
    }

    #[rstest]
    fn test_kind_and_name() {
        let store = DynamicArrayStore::new();
        assert_eq!(store.kind(), StrategyKind::Medium);
        assert_eq!(store.name(), "dynamic array");
    }
}
