//! The ordered view capability contract.
//!
//! An [`OrderedView`] is a finite, indexable sequence that is already sorted
//! according to the predicate it carries. Search algorithms only ever talk
//! to a view through the capabilities below; they never assume that an
//! index is a raw offset.
//!
//! - [`OrderedView`]: forward traversal (`start_index`, `end_index`,
//!   `index_after`, `element_at`) plus the ordering predicate. Its provided
//!   [`insertion_index`](OrderedView::insertion_index) is a linear scan and
//!   serves as the reference implementation.
//! - [`RandomAccessView`]: adds `index_before`, `index_offset` and
//!   `distance`, which every binary search strategy needs.
//!
//! # Adapters
//!
//! - `Range<T>` for every primitive integer `T`: indices and elements are
//!   the integers themselves
//! - [`Subrange`]: a sub-range of any view, sharing its indices and predicate
//! - `Sorted<S, P>`: a sorted backing store (feature `container`)
//!
//! # Examples
//!
//! ```rust
//! use sorted::view::OrderedView;
//!
//! let range = 0_i32..7;
//! assert_eq!(range.insertion_index(&-1), 0);
//! assert_eq!(range.insertion_index(&3), 3);
//! assert_eq!(range.insertion_index(&8), 7);
//! ```

use std::borrow::Borrow;
use std::fmt::Debug;
use std::ops::Range;

mod range;
mod subrange;

pub use subrange::Subrange;

/// A finite sequence, sorted under its own ordering predicate.
///
/// # Contract
///
/// The elements between [`start_index`](Self::start_index) and
/// [`end_index`](Self::end_index) must be sorted non-descending under
/// [`precedes`](Self::precedes). This is never checked at runtime.
pub trait OrderedView {
    /// The element type.
    type Element;

    /// A position in this view. Only meaningful relative to the view it
    /// came from.
    type Index: Copy + Ord + Debug;

    /// What [`element_at`](Self::element_at) hands out: a reference for
    /// stored elements, the value itself for computed ones such as integer
    /// ranges.
    type ElementRef<'a>: Borrow<Self::Element>
    where
        Self: 'a;

    /// The position of the first element.
    fn start_index(&self) -> Self::Index;

    /// The position one past the last element.
    fn end_index(&self) -> Self::Index;

    /// The position immediately after `index`.
    fn index_after(&self, index: Self::Index) -> Self::Index;

    /// The element at `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index` is not a valid element position of this view.
    fn element_at(&self, index: Self::Index) -> Self::ElementRef<'_>;

    /// The ordering predicate this view is sorted by.
    fn precedes(&self, lhs: &Self::Element, rhs: &Self::Element) -> bool;

    /// Returns `true` if the view has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.start_index() == self.end_index()
    }

    /// The number of elements. O(n) unless the view overrides it.
    fn len(&self) -> usize {
        let mut count = 0;
        let mut index = self.start_index();
        let end = self.end_index();
        while index != end {
            count += 1;
            index = self.index_after(index);
        }
        count
    }

    /// Returns `true` if the element at `index` is ordered before `target`.
    #[inline]
    fn element_precedes(&self, index: Self::Index, target: &Self::Element) -> bool {
        let element = self.element_at(index);
        self.precedes(Borrow::<Self::Element>::borrow(&element), target)
    }

    /// Returns `true` if `target` is ordered before the element at `index`.
    #[inline]
    fn target_precedes(&self, target: &Self::Element, index: Self::Index) -> bool {
        let element = self.element_at(index);
        self.precedes(target, Borrow::<Self::Element>::borrow(&element))
    }

    /// Returns `true` if the element at `index` equals `target`.
    ///
    /// Equality is independent of the ordering predicate: two elements can
    /// be equivalent under the ordering without being equal.
    #[inline]
    fn element_equals(&self, index: Self::Index, target: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        let element = self.element_at(index);
        Borrow::<Self::Element>::borrow(&element) == target
    }

    /// A position at which `element` could be inserted while keeping the
    /// view sorted.
    ///
    /// If `element` already occurs, either the index of one of its
    /// occurrences or the index just past the last occurrence may be
    /// returned.
    ///
    /// The provided implementation scans from the start and returns the
    /// first position whose element is not ordered before `element`. O(n).
    /// Random-access adapters override it with a binary search.
    fn insertion_index(&self, element: &Self::Element) -> Self::Index {
        linear_insertion_index(self, element)
    }

    /// A view over `bounds`, sharing this view's indices and predicate.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is not contained in this view's index range.
    fn subrange(&self, bounds: Range<Self::Index>) -> Subrange<'_, Self>
    where
        Self: Sized,
    {
        Subrange::new(self, bounds)
    }
}

/// An [`OrderedView`] that can jump to any position in constant time.
pub trait RandomAccessView: OrderedView {
    /// The position immediately before `index`.
    fn index_before(&self, index: Self::Index) -> Self::Index;

    /// The position `offset` steps after `index`.
    fn index_offset(&self, index: Self::Index, offset: usize) -> Self::Index;

    /// The number of steps from `from` to `to`. Requires `from <= to`.
    fn distance(&self, from: Self::Index, to: Self::Index) -> usize;
}

/// Linear scan shared by [`OrderedView::insertion_index`] and the
/// `LinearScan` search strategy.
pub(crate) fn linear_insertion_index<V>(view: &V, element: &V::Element) -> V::Index
where
    V: OrderedView + ?Sized,
{
    let end = view.end_index();
    let mut index = view.start_index();
    while index != end {
        if !view.element_precedes(index, element) {
            return index;
        }
        index = view.index_after(index);
    }
    end
}

/// The first position whose element `element` is ordered before, scanning
/// from the start.
pub(crate) fn linear_upper_index<V>(view: &V, element: &V::Element) -> V::Index
where
    V: OrderedView + ?Sized,
{
    let end = view.end_index();
    let mut index = view.start_index();
    while index != end {
        if view.target_precedes(element, index) {
            return index;
        }
        index = view.index_after(index);
    }
    end
}

/// The index halfway through `bounds`, or `None` if `bounds` is empty.
#[inline]
pub(crate) fn index_in_middle<V>(view: &V, bounds: &Range<V::Index>) -> Option<V::Index>
where
    V: RandomAccessView + ?Sized,
{
    if bounds.start == bounds.end {
        return None;
    }
    let half = view.distance(bounds.start, bounds.end) / 2;
    Some(view.index_offset(bounds.start, half))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// A forward-only view over a slice, used to exercise the provided
    /// linear-scan methods without any random-access override.
    struct ForwardOnly<'a>(&'a [i32]);

    impl OrderedView for ForwardOnly<'_> {
        type Element = i32;
        type Index = usize;
        type ElementRef<'b>
            = &'b i32
        where
            Self: 'b;

        fn start_index(&self) -> usize {
            0
        }

        fn end_index(&self) -> usize {
            self.0.len()
        }

        fn index_after(&self, index: usize) -> usize {
            index + 1
        }

        fn element_at(&self, index: usize) -> &i32 {
            &self.0[index]
        }

        fn precedes(&self, lhs: &i32, rhs: &i32) -> bool {
            lhs < rhs
        }
    }

    #[rstest]
    #[case(&[], 5, 0)]
    #[case(&[1, 3, 5], 0, 0)]
    #[case(&[1, 3, 5], 3, 1)]
    #[case(&[1, 3, 5], 4, 2)]
    #[case(&[1, 3, 5], 6, 3)]
    #[case(&[2, 2, 2], 2, 0)]
    fn test_linear_insertion_index(
        #[case] elements: &[i32],
        #[case] target: i32,
        #[case] expected: usize,
    ) {
        assert_eq!(ForwardOnly(elements).insertion_index(&target), expected);
    }

    #[rstest]
    #[case(&[], 5, 0)]
    #[case(&[2, 2, 2], 2, 3)]
    #[case(&[1, 2, 2, 3], 2, 3)]
    #[case(&[1, 2, 2, 3], 0, 0)]
    fn test_linear_upper_index(
        #[case] elements: &[i32],
        #[case] target: i32,
        #[case] expected: usize,
    ) {
        assert_eq!(linear_upper_index(&ForwardOnly(elements), &target), expected);
    }

    #[rstest]
    fn test_provided_len_counts_by_walking() {
        assert_eq!(ForwardOnly(&[4, 5, 6]).len(), 3);
        assert_eq!(ForwardOnly(&[]).len(), 0);
    }

    #[rstest]
    fn test_provided_is_empty() {
        assert!(ForwardOnly(&[]).is_empty());
        assert!(!ForwardOnly(&[1]).is_empty());
    }

    #[rstest]
    fn test_element_helpers() {
        let view = ForwardOnly(&[1, 3]);
        assert!(view.element_precedes(0, &3));
        assert!(!view.element_precedes(1, &3));
        assert!(view.target_precedes(&2, 1));
        assert!(view.element_equals(1, &3));
        assert!(!view.element_equals(0, &3));
    }

    #[rstest]
    fn test_index_in_middle() {
        let range = 10_i32..20;
        assert_eq!(index_in_middle(&range, &(10..20)), Some(15));
        assert_eq!(index_in_middle(&range, &(10..11)), Some(10));
        assert_eq!(index_in_middle(&range, &(13..13)), None);
    }
}
