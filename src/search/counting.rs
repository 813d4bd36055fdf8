//! Strategy B: recursion carrying the element count.

use super::SearchStrategy;
use crate::view::RandomAccessView;

/// Bisects like [`RecursiveSlicing`](super::RecursiveSlicing), but threads the
/// element count of the current half through the recursion instead of
/// narrowing a view.
///
/// The view's `distance` is asked once, up front. A half starting at `low`
/// with `count` elements splits into a left half of `count / 2` elements and
/// a right half of `count - count / 2 - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CountTracking;

impl SearchStrategy for CountTracking {
    const NAME: &'static str = "count_tracking";

    fn insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        let start = view.start_index();
        insertion_index_from(view, start, view.distance(start, view.end_index()), element)
    }

    fn first_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        let start = view.start_index();
        partition_point_from(view, start, view.distance(start, view.end_index()), &|index| {
            view.element_precedes(index, element)
        })
    }

    fn last_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        let start = view.start_index();
        partition_point_from(view, start, view.distance(start, view.end_index()), &|index| {
            !view.target_precedes(element, index)
        })
    }
}

fn insertion_index_from<V: RandomAccessView>(
    view: &V,
    low: V::Index,
    count: usize,
    element: &V::Element,
) -> V::Index {
    if count == 0 {
        return low;
    }
    let half = count / 2;
    let middle = view.index_offset(low, half);
    if view.element_precedes(middle, element) {
        insertion_index_from(view, view.index_after(middle), count - half - 1, element)
    } else if view.target_precedes(element, middle) {
        insertion_index_from(view, low, half, element)
    } else {
        middle
    }
}

fn partition_point_from<V, F>(view: &V, low: V::Index, count: usize, goes_right: &F) -> V::Index
where
    V: RandomAccessView,
    F: Fn(V::Index) -> bool,
{
    if count == 0 {
        return low;
    }
    let half = count / 2;
    let middle = view.index_offset(low, half);
    if goes_right(middle) {
        partition_point_from(view, view.index_after(middle), count - half - 1, goes_right)
    } else {
        partition_point_from(view, low, half, goes_right)
    }
}
