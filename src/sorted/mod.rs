//! Sorted containers.
//!
//! [`Sorted<S, P>`] pairs a backing store `S` with the ordering predicate
//! `P` its elements are sorted by, and forwards the [`OrderedView`]
//! capabilities to the store. Two aliases cover the common cases:
//!
//! - [`SortedArray<T, P>`]: owns a `Vec<T>` and keeps it sorted across
//!   insertions and removals
//! - [`SortedSlice<'a, T, P>`]: borrows a slice the caller already sorted
//!
//! # Time Complexity
//!
//! | Operation                      | Complexity   |
//! |--------------------------------|--------------|
//! | `from_unsorted*`               | O(n log n)   |
//! | `from_sorted*`                 | O(n)         |
//! | `insert`                       | O(n)         |
//! | `remove`, `remove_subrange`    | O(n)         |
//! | `first_index_of`, `contains`   | O(log n)     |
//! | `len`, `first`, `last`, `get`  | O(1)         |
//!
//! `insert` spends O(log n) finding its position and O(n) shifting the
//! elements after it.
//!
//! # Examples
//!
//! ```rust
//! use sorted::prelude::*;
//!
//! let mut array = SortedArray::from_unsorted([3, 2, 1]);
//! assert_eq!(array.insert(0), 0);
//! assert_eq!(array.as_slice(), &[0, 1, 2, 3]);
//!
//! let slice = [1, 3, 5, 7];
//! let view = SortedSlice::from_sorted_storage(&slice[..], NaturalOrder);
//! assert_eq!(view.first_index_of(&5), Some(2));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::ordering::{NaturalOrder, OrderingPredicate};
use crate::search::{Iterative, SearchStrategy};
use crate::view::{OrderedView, RandomAccessView};

mod array;
mod merge;

/// A contiguous backing store for [`Sorted`].
///
/// Read-only access is all a view needs; mutation is provided for `Vec`
/// through [`SortedArray`].
pub trait Storage {
    /// The element type.
    type Element;

    /// The stored elements, in order.
    fn as_slice(&self) -> &[Self::Element];
}

impl<T> Storage for Vec<T> {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Storage for &[T] {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T> Storage for Box<[T]> {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Storage for [T; N] {
    type Element = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self
    }
}

/// A backing store whose elements are sorted under `P`.
///
/// Equality compares the element sequences only; the predicate is not part
/// of it.
///
/// # Type Parameters
///
/// * `S` - The backing store. See [`Storage`].
/// * `P` - The ordering predicate. Defaults to [`NaturalOrder`].
#[derive(Clone, Copy)]
pub struct Sorted<S, P = NaturalOrder> {
    storage: S,
    ordering: P,
}

/// An owned, growable sorted array.
///
/// See [`Sorted`] for the read-only API and the `SortedArray`-specific
/// constructors and mutators.
pub type SortedArray<T, P = NaturalOrder> = Sorted<Vec<T>, P>;

/// A sorted view over a borrowed slice.
pub type SortedSlice<'a, T, P = NaturalOrder> = Sorted<&'a [T], P>;

impl<S, P> Sorted<S, P>
where
    S: Storage,
    P: OrderingPredicate<S::Element>,
{
    /// Wraps a store that is already sorted under `ordering`.
    ///
    /// O(1). The order is trusted and never checked.
    ///
    /// # Preconditions
    ///
    /// `storage` must be sorted non-descending under `ordering`. If it is
    /// not, every later search returns unspecified positions (a logic
    /// error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::ordering::Reversed;
    /// use sorted::prelude::*;
    ///
    /// let descending = [9, 7, 7, 2];
    /// let view = SortedSlice::from_sorted_storage(&descending[..], Reversed(NaturalOrder));
    /// assert_eq!(view.first_index_of(&7), Some(1));
    /// assert_eq!(view.last_index_of(&7), Some(2));
    /// ```
    #[inline]
    pub const fn from_sorted_storage(storage: S, ordering: P) -> Self {
        Self { storage, ordering }
    }
}

impl<S: Storage, P> Sorted<S, P> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.as_slice().len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.as_slice().is_empty()
    }

    /// The elements, in sorted order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[S::Element] {
        self.storage.as_slice()
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, S::Element> {
        self.as_slice().iter()
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S::Element> {
        self.as_slice().get(index)
    }

    /// The first element in sorted order.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&S::Element> {
        self.as_slice().first()
    }

    /// The last element in sorted order.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&S::Element> {
        self.as_slice().last()
    }

    /// The least element under the ordering predicate. O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::SortedArray;
    ///
    /// let array = SortedArray::from_unsorted(-10..=10);
    /// assert_eq!(array.min(), Some(&-10));
    /// ```
    #[inline]
    #[must_use]
    pub fn min(&self) -> Option<&S::Element> {
        self.first()
    }

    /// The greatest element under the ordering predicate. O(1).
    ///
    /// When several elements are equivalent, this is the last of them.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<&S::Element> {
        self.last()
    }

    /// The ordering predicate.
    #[inline]
    pub const fn ordering(&self) -> &P {
        &self.ordering
    }

    /// Releases the backing store.
    #[inline]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S, P> OrderedView for Sorted<S, P>
where
    S: Storage,
    P: OrderingPredicate<S::Element>,
{
    type Element = S::Element;
    type Index = usize;
    type ElementRef<'a>
        = &'a S::Element
    where
        Self: 'a;

    #[inline]
    fn start_index(&self) -> usize {
        0
    }

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    #[inline]
    fn element_at(&self, index: usize) -> &S::Element {
        &self.as_slice()[index]
    }

    #[inline]
    fn precedes(&self, lhs: &S::Element, rhs: &S::Element) -> bool {
        self.ordering.precedes(lhs, rhs)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn insertion_index(&self, element: &S::Element) -> usize {
        Iterative::insertion_index(self, element)
    }
}

impl<S, P> RandomAccessView for Sorted<S, P>
where
    S: Storage,
    P: OrderingPredicate<S::Element>,
{
    #[inline]
    fn index_before(&self, index: usize) -> usize {
        index - 1
    }

    #[inline]
    fn index_offset(&self, index: usize, offset: usize) -> usize {
        index + offset
    }

    #[inline]
    fn distance(&self, from: usize, to: usize) -> usize {
        to - from
    }
}

impl<S, S2, P, P2> PartialEq<Sorted<S2, P2>> for Sorted<S, P>
where
    S: Storage,
    S2: Storage,
    S::Element: PartialEq<S2::Element>,
{
    fn eq(&self, other: &Sorted<S2, P2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<S, P> Eq for Sorted<S, P>
where
    S: Storage,
    S::Element: Eq,
{
}

impl<S, P> Hash for Sorted<S, P>
where
    S: Storage,
    S::Element: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<S, P> fmt::Debug for Sorted<S, P>
where
    S: Storage,
    S::Element: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<S: Storage, P> Index<usize> for Sorted<S, P> {
    type Output = S::Element;

    #[inline]
    fn index(&self, index: usize) -> &S::Element {
        &self.as_slice()[index]
    }
}

impl<S: Storage, P> AsRef<[S::Element]> for Sorted<S, P> {
    #[inline]
    fn as_ref(&self) -> &[S::Element] {
        self.as_slice()
    }
}

impl<'a, S: Storage, P> IntoIterator for &'a Sorted<S, P> {
    type Item = &'a S::Element;
    type IntoIter = std::slice::Iter<'a, S::Element>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<S, P> serde::Serialize for Sorted<S, P>
where
    S: Storage,
    S::Element: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

static_assertions::assert_impl_all!(SortedArray<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SortedSlice<'static, String>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(SortedArray<i32>: Copy);
