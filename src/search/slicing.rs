//! Strategy A: recursion on narrowed sub-ranges.

use super::SearchStrategy;
use crate::view::{OrderedView, RandomAccessView, Subrange, index_in_middle};

/// Bisects a [`Subrange`] and recurses into a freshly narrowed half.
///
/// No offsets are carried between calls: each level only knows its own
/// bounds and recomputes the midpoint from them, at the cost of one
/// `distance` call per level. Recursion depth is O(log n).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RecursiveSlicing;

impl SearchStrategy for RecursiveSlicing {
    const NAME: &'static str = "recursive_slicing";

    fn insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        insertion_index_in(Subrange::full(view), element)
    }

    fn first_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        partition_point_in(Subrange::full(view), &|index| {
            view.element_precedes(index, element)
        })
    }

    fn last_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        partition_point_in(Subrange::full(view), &|index| {
            !view.target_precedes(element, index)
        })
    }
}

fn insertion_index_in<V: RandomAccessView>(
    range: Subrange<'_, V>,
    element: &V::Element,
) -> V::Index {
    let Some(middle) = index_in_middle(&range, &range.bounds()) else {
        return range.end_index();
    };
    if range.element_precedes(middle, element) {
        insertion_index_in(range.narrow(range.index_after(middle)..range.end_index()), element)
    } else if range.target_precedes(element, middle) {
        insertion_index_in(range.narrow(range.start_index()..middle), element)
    } else {
        middle
    }
}

/// The first index of `range` for which `goes_right` is false, given that
/// `goes_right` holds for a prefix of `range` and fails for the rest.
fn partition_point_in<V, F>(range: Subrange<'_, V>, goes_right: &F) -> V::Index
where
    V: RandomAccessView,
    F: Fn(V::Index) -> bool,
{
    let Some(middle) = index_in_middle(&range, &range.bounds()) else {
        return range.end_index();
    };
    if goes_right(middle) {
        partition_point_in(range.narrow(range.index_after(middle)..range.end_index()), goes_right)
    } else {
        partition_point_in(range.narrow(range.start_index()..middle), goes_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0..1, 0, 0)]
    #[case(0..1, 5, 1)]
    #[case(0..2, 1, 1)]
    #[case(-10..10, -10, -10)]
    #[case(-10..10, 9, 9)]
    fn test_first_insertion_index_on_ranges(
        #[case] range: std::ops::Range<i32>,
        #[case] target: i32,
        #[case] expected: i32,
    ) {
        assert_eq!(RecursiveSlicing::first_insertion_index(&range, &target), expected);
    }

    #[rstest]
    fn test_loose_insertion_index_stops_on_exact_hit() {
        let range = 0_i32..1000;
        assert_eq!(RecursiveSlicing::insertion_index(&range, &500), 500);
        assert_eq!(RecursiveSlicing::insertion_index(&range, &999), 999);
    }

    #[rstest]
    fn test_last_insertion_index_past_end() {
        let range = 0_i32..5;
        assert_eq!(RecursiveSlicing::last_insertion_index(&range, &4), 5);
        assert_eq!(RecursiveSlicing::last_insertion_index(&range, &100), 5);
        assert_eq!(RecursiveSlicing::last_insertion_index(&range, &-1), 0);
    }
}
