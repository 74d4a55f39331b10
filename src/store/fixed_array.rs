//! Fixed-capacity array storage.

use arrayvec::ArrayVec;

use super::{StorageStrategy, StoreError, StrategyKind};

/// Number of slots in the fixed-capacity backend.
pub const FIXED_CAPACITY: usize = 100;

/// Storage backed by a preallocated inline buffer of [`FIXED_CAPACITY`] slots.
///
/// Inserts that arrive while the buffer is full are absorbed silently
/// (saturating insert). Removal swaps the last element into the vacated slot,
/// so it runs in O(1) but does not preserve iteration order; callers must not
/// assume stable ordering across removals.
#[derive(Debug, Clone, Default)]
pub struct FixedArrayStore {
    data: ArrayVec<i32, FIXED_CAPACITY>,
}

impl FixedArrayStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: ArrayVec::new(),
        }
    }

    /// Fallible insert: `false` when the buffer is full and `value` was
    /// dropped.
    ///
    /// [`StorageStrategy::insert`] discards this indicator; the saturating
    /// behavior stays observable through `len` and `contains`.
    fn try_insert(&mut self, value: i32) -> bool {
        self.data.try_push(value).is_ok()
    }
}

impl StorageStrategy for FixedArrayStore {
    fn insert(&mut self, value: i32) {
        if !self.contains(value) {
            let _ = self.try_insert(value);
        }
    }

    fn remove(&mut self, value: i32) {
        if let Some(position) = self.data.iter().position(|&element| element == value) {
            self.data.swap_remove(position);
        }
    }

    fn contains(&self, value: i32) -> bool {
        self.data.iter().any(|&element| element == value)
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
        StrategyKind::Small
    }
}
