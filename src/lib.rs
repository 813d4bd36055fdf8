//! # sorted
//!
//! Sorted collections and search strategies over a caller-supplied ordering
//! predicate.
//!
//! ## Overview
//!
//! - **Ordering predicates**: a strict weak ordering `precedes(a, b)`, given
//!   as a closure, [`NaturalOrder`](ordering::NaturalOrder) or an adapter
//! - **Ordered views**: any sequence already sorted under a predicate, such
//!   as an integer range, a sorted slice or a [`Subrange`](view::Subrange)
//!   of another view
//! - **Search strategies**: four interchangeable ways to find insertion
//!   points, from a linear scan to an iterative binary search
//! - **Sorted containers**: [`SortedArray`] keeps its elements sorted across
//!   insertions and removals; [`SortedSlice`] borrows a slice the caller
//!   sorted
//!
//! ## Feature Flags
//!
//! - `container`: [`Sorted`], [`SortedArray`] and [`SortedSlice`] (default)
//! - `serde`: serialization of sorted containers
//! - `rayon`: parallel sorting on construction
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sorted::prelude::*;
//!
//! let mut array = SortedArray::from_unsorted([7, 3, 5]);
//! assert_eq!(array.insert(4), 1);
//! assert_eq!(array.first_index_of(&5), Some(2));
//! assert!(!array.contains(&6));
//!
//! let range = 0_u32..100;
//! assert_eq!(Strategy::CountTracking.insertion_index(&range, &42), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use sorted::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ParseStrategyError, SortedError};
    pub use crate::ordering::*;
    pub use crate::search::*;
    pub use crate::view::*;

    #[cfg(feature = "container")]
    pub use crate::sorted::*;
}

pub mod error;
pub mod ordering;
pub mod search;
pub mod view;

#[cfg(feature = "container")]
pub mod sorted;

pub use error::{ParseStrategyError, SortedError};

#[cfg(feature = "container")]
pub use sorted::{Sorted, SortedArray, SortedSlice, Storage};
