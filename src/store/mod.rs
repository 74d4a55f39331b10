//! Storage backends for [`AdaptiveSet`](crate::set::AdaptiveSet).
//!
//! This module defines the [`StorageStrategy`] contract and its three
//! implementors. The contract is closed by design: the adaptive set only
//! ever selects between these three kinds, identified by [`StrategyKind`],
//! and no open extensibility is intended.
//!
//! | Backend                | `insert`      | `remove`              | `get(index)` |
//! |------------------------|---------------|-----------------------|--------------|
//! | [`FixedArrayStore`]    | O(n), bounded | O(n) find, O(1) swap  | O(1)         |
//! | [`DynamicArrayStore`]  | O(n)          | O(n) find + shift     | O(1)         |
//! | [`LinkedListStore`]    | O(n)          | O(n) find, O(1) unlink| O(n) walk    |
//!
//! `contains` is an O(n) linear scan in every backend. The only fallible
//! operation is `get`, which reports [`StoreError::IndexOutOfRange`] for an
//! index past the end of the store; `insert` and `remove` absorb invalid
//! input (duplicates, absent values, a full fixed buffer) as silent no-ops.

use static_assertions::{const_assert, const_assert_eq};

mod dynamic_array;
mod fixed_array;
mod linked_list;

pub use dynamic_array::DynamicArrayStore;
pub use fixed_array::{FIXED_CAPACITY, FixedArrayStore};
pub use linked_list::LinkedListStore;

/// Largest element count served by the small (fixed array) backend.
pub const SMALL_MAX: usize = 100;

/// Largest element count served by the medium (dynamic array) backend.
pub const MEDIUM_MAX: usize = 1000;

const_assert!(SMALL_MAX < MEDIUM_MAX);
const_assert_eq!(SMALL_MAX, FIXED_CAPACITY);

/// Capability contract shared by the three storage backends.
///
/// A store owns an ordered sequence of distinct `i32` values. The order is
/// implementation-defined and carries no semantic meaning; it only fixes the
/// positions reported by [`get`](Self::get), which the adaptive set uses to
/// copy elements across during migration.
pub trait StorageStrategy {
    /// Inserts `value` if it is not already present.
    ///
    /// Duplicates are absorbed silently. The fixed-capacity backend also
    /// absorbs inserts that arrive while it is full.
    fn insert(&mut self, value: i32);

    /// Removes `value` if present; does nothing otherwise.
    fn remove(&mut self, value: i32);

    /// Returns `true` if `value` is present.
    ///
    /// Linear scan in every backend.
    fn contains(&self, value: i32) -> bool;

    /// Number of distinct elements currently stored.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index` in the store's current iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IndexOutOfRange`] when `index >= len()`.
    fn get(&self, index: usize) -> Result<i32, StoreError>;

    /// Which of the three backends this is.
    fn kind(&self) -> StrategyKind;

    /// Human-readable label of the backend, for observability only.
    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Identifies which of the three storage backends is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Fixed-capacity inline array, for sets of up to [`SMALL_MAX`] elements.
    Small,
    /// Growable array, for sets of up to [`MEDIUM_MAX`] elements.
    Medium,
    /// Doubly linked list, for anything larger.
    Large,
}

impl StrategyKind {
    /// Selects the backend responsible for a set of `len` elements.
    #[must_use]
    pub const fn for_len(len: usize) -> Self {
        if len <= SMALL_MAX {
            Self::Small
        } else if len <= MEDIUM_MAX {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Capacity limit of the backend, if it has one.
    #[must_use]
    pub const fn capacity(self) -> Option<usize> {
        match self {
            Self::Small => Some(FIXED_CAPACITY),
            Self::Medium | Self::Large => None,
        }
    }

    /// Human-readable label of the backend.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "fixed array",
            Self::Medium => "dynamic array",
            Self::Large => "linked list",
        }
    }

    /// Creates a fresh, empty store of this kind.
    #[must_use]
    pub fn new_store(self) -> Box<dyn StorageStrategy> {
        match self {
            Self::Small => Box::new(FixedArrayStore::new()),
            Self::Medium => Box::new(DynamicArrayStore::new()),
            Self::Large => Box::new(LinkedListStore::new()),
        }
    }
}

/// Payload of [`StoreError::IndexOutOfRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    /// The index passed to `get`.
    pub index: usize,
    /// The number of elements the store held at the time.
    pub len: usize,
}

impl std::fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for store of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Errors produced by [`StorageStrategy`] operations.
///
/// `get` is the only fallible operation; every other operation absorbs
/// invalid input as a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// `get` was called with an index past the end of the store.
    IndexOutOfRange(IndexOutOfRangeError),
}

impl StoreError {
    pub(crate) const fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange(IndexOutOfRangeError { index, len })
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_error_display() {
        let error = IndexOutOfRangeError { index: 5, len: 3 };
        assert_eq!(
            format!("{error}"),
            "index 5 out of range for store of length 3"
        );
    }

    #[test]
    fn test_store_error_display_matches_payload() {
        let error = StoreError::out_of_range(0, 0);
        assert_eq!(
            format!("{error}"),
            "index 0 out of range for store of length 0"
        );
    }

    #[test]
    fn test_for_len_selects_backend_at_thresholds() {
        assert_eq!(StrategyKind::for_len(0), StrategyKind::Small);
        assert_eq!(StrategyKind::for_len(SMALL_MAX), StrategyKind::Small);
        assert_eq!(StrategyKind::for_len(SMALL_MAX + 1), StrategyKind::Medium);
        assert_eq!(StrategyKind::for_len(MEDIUM_MAX), StrategyKind::Medium);
        assert_eq!(StrategyKind::for_len(MEDIUM_MAX + 1), StrategyKind::Large);
    }

    #[test]
    fn test_only_small_backend_reports_a_capacity() {
        assert_eq!(StrategyKind::Small.capacity(), Some(FIXED_CAPACITY));
        assert_eq!(StrategyKind::Medium.capacity(), None);
        assert_eq!(StrategyKind::Large.capacity(), None);
    }

    #[test]
    fn test_new_store_round_trips_kind_and_name() {
        for kind in [StrategyKind::Small, StrategyKind::Medium, StrategyKind::Large] {
            let store = kind.new_store();
            assert_eq!(store.kind(), kind);
            assert_eq!(store.name(), kind.name());
            assert!(store.is_empty());
        }
    }
}
