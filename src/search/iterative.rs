//! Strategy C: the bisection as a loop.

use super::SearchStrategy;
use crate::view::RandomAccessView;

/// Bisects `(low, high)` in a loop, keeping a running element count so the
/// midpoint never needs a `distance` call after the first.
///
/// No recursion, so stack use is constant regardless of input size. This is
/// the strategy used by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Iterative;

impl SearchStrategy for Iterative {
    const NAME: &'static str = "iterative";

    fn insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        let mut low = view.start_index();
        let mut high = view.end_index();
        let mut count = view.distance(low, high);
        while low != high {
            let half = count / 2;
            let middle = view.index_offset(low, half);
            if view.element_precedes(middle, element) {
                low = view.index_after(middle);
                count -= half + 1;
            } else if view.target_precedes(element, middle) {
                high = middle;
                count = half;
            } else {
                return middle;
            }
        }
        low
    }

    #[inline]
    fn first_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        partition_point(view, |index| view.element_precedes(index, element))
    }

    #[inline]
    fn last_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        partition_point(view, |index| !view.target_precedes(element, index))
    }
}

fn partition_point<V, F>(view: &V, goes_right: F) -> V::Index
where
    V: RandomAccessView,
    F: Fn(V::Index) -> bool,
{
    let mut low = view.start_index();
    let mut high = view.end_index();
    let mut count = view.distance(low, high);
    while low != high {
        let half = count / 2;
        let middle = view.index_offset(low, half);
        if goes_right(middle) {
            low = view.index_after(middle);
            count -= half + 1;
        } else {
            high = middle;
            count = half;
        }
    }
    debug_assert_eq!(count, 0);
    low
}
