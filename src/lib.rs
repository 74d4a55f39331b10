//! # adapset
//!
//! An integer set that adapts its internal storage to its size.
//!
//! ## Overview
//!
//! [`AdaptiveSet`] stores distinct `i32` values behind exactly one of three
//! interchangeable storage backends and migrates between them as the element
//! count crosses size thresholds:
//!
//! - **Fixed array** (up to 100 elements): a preallocated inline buffer,
//!   cheapest for small sets
//! - **Dynamic array** (up to 1000 elements): a growable contiguous buffer
//! - **Linked list** (beyond 1000 elements): a doubly linked sequence
//!
//! Every backend satisfies the same [`StorageStrategy`] contract, so the set
//! delegates each query and mutation to whichever store is active and swaps
//! the store out wholesale when a threshold is crossed.
//!
//! Membership checks are a linear scan in every backend. This is a deliberate
//! simplification: the crate is about the storage-migration machinery, not
//! about sub-linear lookup.
//!
//! ## Example
//!
//! ```rust
//! use adapset::AdaptiveSet;
//!
//! let mut set = AdaptiveSet::new();
//! for value in 0..150 {
//!     set.insert(value);
//! }
//!
//! assert_eq!(set.len(), 150);
//! assert!(set.contains(50));
//! assert_eq!(set.name(), "dynamic array");
//!
//! set.remove(50);
//! assert!(!set.contains(50));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use adapset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::AdaptiveSet;
    pub use crate::store::{StorageStrategy, StoreError, StrategyKind};
}

pub mod set;
pub mod store;

pub use set::AdaptiveSet;
pub use store::{
    DynamicArrayStore, FixedArrayStore, LinkedListStore, MEDIUM_MAX, SMALL_MAX, StorageStrategy,
    StoreError, StrategyKind,
};
