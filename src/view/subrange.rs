//! Sub-ranges of ordered views.

use std::fmt;
use std::ops::Range;

use super::{OrderedView, RandomAccessView};
use crate::search::{Iterative, SearchStrategy};

/// A contiguous part of another [`OrderedView`].
///
/// A sub-range of a sorted view is itself sorted under the same predicate,
/// so `Subrange` forwards every capability to its base. Indices are shared
/// with the base view: index `i` of a sub-range names the same element as
/// index `i` of its base.
///
/// # Complexity
///
/// [`OrderedView::insertion_index`] on a `Subrange` is a forward scan, O(n)
/// in the length of the sub-range, for every base view. When the base is a
/// [`RandomAccessView`], use [`binary_insertion_index`](Self::binary_insertion_index)
/// or the [`SortedSearch`](crate::search::SortedSearch) methods, which run
/// in O(log n).
///
/// # Examples
///
/// ```rust
/// use sorted::search::SortedSearch;
/// use sorted::view::OrderedView;
///
/// let range = 0_i32..100;
/// let upper = range.subrange(50..100);
/// assert_eq!(upper.insertion_index(&10), 50);
/// assert_eq!(upper.first_index_of(&75), Some(75));
/// assert_eq!(upper.first_index_of(&25), None);
/// ```
pub struct Subrange<'a, V: OrderedView> {
    base: &'a V,
    start: V::Index,
    end: V::Index,
}

impl<'a, V: OrderedView> Subrange<'a, V> {
    /// Creates a view over `bounds` of `base`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is reversed or not contained in the index range of
    /// `base`.
    pub fn new(base: &'a V, bounds: Range<V::Index>) -> Self {
        assert!(
            base.start_index() <= bounds.start
                && bounds.start <= bounds.end
                && bounds.end <= base.end_index(),
            "subrange {:?} out of bounds {:?}",
            bounds,
            base.start_index()..base.end_index()
        );
        Self {
            base,
            start: bounds.start,
            end: bounds.end,
        }
    }

    /// A view over the whole of `base`.
    pub fn full(base: &'a V) -> Self {
        Self {
            base,
            start: base.start_index(),
            end: base.end_index(),
        }
    }

    /// Narrows this sub-range to `bounds` without nesting adapters.
    ///
    /// The result borrows the same base view, so repeated narrowing keeps a
    /// single `Subrange<'a, V>` type.
    #[inline]
    pub(crate) fn narrow(&self, bounds: Range<V::Index>) -> Self {
        debug_assert!(self.start <= bounds.start && bounds.end <= self.end);
        Self {
            base: self.base,
            start: bounds.start,
            end: bounds.end,
        }
    }

    /// The view this sub-range was taken from.
    pub fn base(&self) -> &'a V {
        self.base
    }

    /// The index bounds of this sub-range within its base.
    pub fn bounds(&self) -> Range<V::Index> {
        self.start..self.end
    }
}

impl<V: OrderedView> Clone for Subrange<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: OrderedView> Copy for Subrange<'_, V> {}

impl<V: OrderedView> fmt::Debug for Subrange<'_, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Subrange")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl<'a, V: OrderedView> OrderedView for Subrange<'a, V> {
    type Element = V::Element;
    type Index = V::Index;
    type ElementRef<'b>
        = V::ElementRef<'b>
    where
        Self: 'b;

    #[inline]
    fn start_index(&self) -> V::Index {
        self.start
    }

    #[inline]
    fn end_index(&self) -> V::Index {
        self.end
    }

    #[inline]
    fn index_after(&self, index: V::Index) -> V::Index {
        self.base.index_after(index)
    }

    #[inline]
    fn element_at(&self, index: V::Index) -> V::ElementRef<'_> {
        debug_assert!(self.start <= index && index < self.end);
        self.base.element_at(index)
    }

    #[inline]
    fn precedes(&self, lhs: &V::Element, rhs: &V::Element) -> bool {
        self.base.precedes(lhs, rhs)
    }
}

impl<'a, V: RandomAccessView> RandomAccessView for Subrange<'a, V> {
    #[inline]
    fn index_before(&self, index: V::Index) -> V::Index {
        self.base.index_before(index)
    }

    #[inline]
    fn index_offset(&self, index: V::Index, offset: usize) -> V::Index {
        self.base.index_offset(index, offset)
    }

    #[inline]
    fn distance(&self, from: V::Index, to: V::Index) -> usize {
        self.base.distance(from, to)
    }
}

impl<V: RandomAccessView> Subrange<'_, V> {
    /// Same as [`OrderedView::insertion_index`], in O(log n).
    ///
    /// The trait method falls back to a linear scan here because a generic
    /// `Subrange` is only known to be forward-traversable.
    pub fn binary_insertion_index(&self, element: &V::Element) -> V::Index {
        Iterative::insertion_index(self, element)
    }
}
