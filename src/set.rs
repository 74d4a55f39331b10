//! Adaptive set with automatic storage migration.
//!
//! This module provides [`AdaptiveSet`], a set of `i32` values that holds
//! exactly one active [`StorageStrategy`] and re-evaluates which backend
//! should be active after every mutation, migrating all elements when the
//! element count crosses a threshold.
//!
//! # State Transitions
//!
//! ```text
//!              count > 100               count > 1000
//!    Small ──────────────────► Medium ──────────────────► Large
//!  (fixed array)          (dynamic array)            (linked list)
//!      ▲                       │   ▲                       │
//!      └───────────────────────┘   └───────────────────────┘
//!              count <= 100              count <= 1000
//! ```
//!
//! # Threshold estimation
//!
//! The count driving a transition is an *estimate*: the active store's count
//! after the mutation, adjusted by the mutation's nominal delta (+1 for
//! insert, -1 for remove). The estimate deliberately assumes the mutation
//! took effect, which keeps the decision a single O(1) comparison but makes
//! it diverge from the true count when the mutation was absorbed as a no-op:
//!
//! - a duplicate insert, or an insert rejected by a full fixed store, still
//!   counts as +1 and can promote one mutation early;
//! - removing an absent value still counts as -1 and can demote one
//!   mutation early.
//!
//! A demotion whose target cannot hold the actual element count is deferred
//! until the count fits; migration therefore never loses elements, and the
//! active store's reported length always equals the true logical size.

use crate::store::{StorageStrategy, StrategyKind};

/// A set of `i32` values that migrates between three storage backends as
/// its element count crosses the 100 and 1000 thresholds.
///
/// The set exclusively owns its active store. A migration builds the new
/// store in full, then replaces the old one wholesale; no half-migrated
/// state is ever observable.
///
/// # Examples
///
/// ```rust
/// use adapset::{AdaptiveSet, StrategyKind};
///
/// let mut set = AdaptiveSet::new();
/// assert_eq!(set.kind(), StrategyKind::Small);
///
/// for value in 0..150 {
///     set.insert(value);
/// }
/// assert_eq!(set.len(), 150);
/// assert_eq!(set.kind(), StrategyKind::Medium);
/// assert_eq!(set.name(), "dynamic array");
/// ```
pub struct AdaptiveSet {
    store: Box<dyn StorageStrategy>,
}

impl AdaptiveSet {
    /// Creates an empty set backed by the fixed array store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: StrategyKind::Small.new_store(),
        }
    }

    /// Inserts `value` if it is not already present.
    ///
    /// Duplicates are absorbed silently. Afterwards the storage backend is
    /// re-evaluated and may be migrated (see the module docs for the
    /// estimation rule).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adapset::AdaptiveSet;
    ///
    /// let mut set = AdaptiveSet::new();
    /// set.insert(42);
    /// set.insert(42);
    ///
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(42));
    /// ```
    pub fn insert(&mut self, value: i32) {
        self.store.insert(value);
        self.rebalance(1);
    }

    /// Removes `value` if present; does nothing otherwise.
    ///
    /// Afterwards the storage backend is re-evaluated and may be migrated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adapset::AdaptiveSet;
    ///
    /// let mut set = AdaptiveSet::new();
    /// set.insert(42);
    /// set.remove(42);
    ///
    /// assert!(!set.contains(42));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, value: i32) {
        self.store.remove(value);
        self.rebalance(-1);
    }

    /// Returns `true` if `value` is present.
    ///
    /// Delegates to the active store with no migration side effect.
    /// Linear scan in every backend.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.store.contains(value)
    }

    /// Number of distinct elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the set holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Which storage backend is currently active.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        self.store.kind()
    }

    /// Human-readable label of the active backend, for observability only.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.store.name()
    }

    /// Copies all elements into a `Vec`, in the active store's iteration
    /// order.
    ///
    /// The order is implementation-defined and changes across migrations
    /// and removals; only the membership is meaningful.
    #[must_use]
    pub fn to_vec(&self) -> Vec<i32> {
        (0..self.store.len())
            .filter_map(|index| self.store.get(index).ok())
            .collect()
    }

    /// Re-evaluates the active backend after a mutation and migrates if the
    /// estimated element count selects a different kind.
    ///
    /// Migration copies every element from the old store into a fresh store
    /// of the target kind via sequential positional reads, then replaces the
    /// old store wholesale.
    fn rebalance(&mut self, delta: isize) {
        let estimate = self.store.len().saturating_add_signed(delta);
        let target = StrategyKind::for_len(estimate);
        if target == self.store.kind() {
            return;
        }
        // The estimate can select the bounded store while one element too
        // many is actually held; copying would drop the surplus. Defer the
        // demotion until the real count fits.
        if target
            .capacity()
            .is_some_and(|capacity| self.store.len() > capacity)
        {
            return;
        }

        let mut next = target.new_store();
        for index in 0..self.store.len() {
            // index ranges over the store's own length, so get cannot fail
            if let Ok(value) = self.store.get(index) {
                next.insert(value);
            }
        }
        self.store = next;
    }
}

impl Default for AdaptiveSet {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AdaptiveSet {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_set().entries(self.to_vec()).finish()
    }
}

impl PartialEq for AdaptiveSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .to_vec()
                .iter()
                .all(|&element| other.contains(element))
    }
}

impl Eq for AdaptiveSet {}

impl Extend<i32> for AdaptiveSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for AdaptiveSet {
    /// Builds a set by inserting every yielded value in order, running the
    /// usual storage migrations along the way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adapset::{AdaptiveSet, StrategyKind};
    ///
    /// let set: AdaptiveSet = (0..500).collect();
    /// assert_eq!(set.len(), 500);
    /// assert_eq!(set.kind(), StrategyKind::Medium);
    /// ```
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
