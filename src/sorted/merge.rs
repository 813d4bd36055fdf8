//! Stable merge sort driven by an [`OrderingPredicate`].
//!
//! Only `precedes` is consulted and every element is moved exactly once per
//! merge level. An inconsistent predicate never makes the sort panic: the
//! result is then some permutation of the input in an unspecified order.

use crate::ordering::OrderingPredicate;

const INSERTION_SORT_BASE: usize = 32;

#[cfg(feature = "rayon")]
const PARALLEL_BASE: usize = 4096;

/// Sorts `elements` stably under `ordering`. O(n log n).
pub(crate) fn merge_sort<T, P>(elements: Vec<T>, ordering: &P) -> Vec<T>
where
    P: OrderingPredicate<T>,
{
    if elements.len() <= INSERTION_SORT_BASE {
        return insertion_sort(elements, ordering);
    }
    let mut left = elements;
    let right = left.split_off(left.len() / 2);
    let left = merge_sort(left, ordering);
    let right = merge_sort(right, ordering);
    merge(left, right, ordering)
}

/// Same as [`merge_sort`], sorting the two halves on the rayon pool while
/// they are large.
#[cfg(feature = "rayon")]
pub(crate) fn par_merge_sort<T, P>(elements: Vec<T>, ordering: &P) -> Vec<T>
where
    T: Send,
    P: OrderingPredicate<T> + Sync,
{
    if elements.len() <= PARALLEL_BASE {
        return merge_sort(elements, ordering);
    }
    let mut left = elements;
    let right = left.split_off(left.len() / 2);
    let (left, right) = rayon::join(
        || par_merge_sort(left, ordering),
        || par_merge_sort(right, ordering),
    );
    merge(left, right, ordering)
}

/// Merges two sorted runs. On ties the element from `left` comes first.
pub(crate) fn merge<T, P>(left: Vec<T>, right: Vec<T>, ordering: &P) -> Vec<T>
where
    P: OrderingPredicate<T>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(lhs), Some(rhs)) => ordering.precedes(rhs, lhs),
            _ => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

fn insertion_sort<T, P>(elements: Vec<T>, ordering: &P) -> Vec<T>
where
    P: OrderingPredicate<T>,
{
    let mut sorted: Vec<T> = Vec::with_capacity(elements.len());
    for element in elements {
        let mut index = sorted.len();
        while index > 0 && ordering.precedes(&element, &sorted[index - 1]) {
            index -= 1;
        }
        sorted.insert(index, element);
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::NaturalOrder;
    use rstest::rstest;

    /// Deterministic pseudo-random values (64-bit LCG).
    fn pseudo_random(seed: u64, length: usize) -> Vec<i64> {
        let mut state = seed;
        (0..length)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                i64::try_from(state >> 40).unwrap_or_default() % 1000
            })
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(INSERTION_SORT_BASE)]
    #[case(INSERTION_SORT_BASE + 1)]
    #[case(1000)]
    fn test_merge_sort_matches_std_sort(#[case] length: usize) {
        let elements = pseudo_random(7, length);
        let mut expected = elements.clone();
        expected.sort_unstable();
        assert_eq!(merge_sort(elements, &NaturalOrder), expected);
    }

    #[rstest]
    fn test_merge_sort_is_stable() {
        let by_key = |lhs: &(i64, usize), rhs: &(i64, usize)| lhs.0 < rhs.0;
        let elements: Vec<(i64, usize)> = pseudo_random(3, 500)
            .into_iter()
            .map(|value| value % 10)
            .enumerate()
            .map(|(position, key)| (key, position))
            .collect();
        let sorted = merge_sort(elements, &by_key);
        assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[rstest]
    fn test_merge_prefers_left_on_ties() {
        let by_key = |lhs: &(i32, char), rhs: &(i32, char)| lhs.0 < rhs.0;
        let merged = merge(vec![(1, 'a'), (2, 'b')], vec![(1, 'c'), (2, 'd')], &by_key);
        assert_eq!(merged, vec![(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    fn test_inconsistent_predicate_yields_permutation(#[case] seed: u64) {
        let not_a_weak_ordering = |lhs: &i64, rhs: &i64| lhs + 10 < *rhs;
        let elements = pseudo_random(seed, 500);
        let mut sorted = merge_sort(elements.clone(), &not_a_weak_ordering);
        let mut expected = elements;
        sorted.sort_unstable();
        expected.sort_unstable();
        assert_eq!(sorted, expected);
    }

    #[cfg(feature = "rayon")]
    #[rstest]
    fn test_par_merge_sort_matches_merge_sort() {
        let by_bucket = |lhs: &(i64, usize), rhs: &(i64, usize)| lhs.0 / 100 < rhs.0 / 100;
        let elements: Vec<(i64, usize)> = pseudo_random(11, 3 * PARALLEL_BASE)
            .into_iter()
            .enumerate()
            .map(|(position, value)| (value, position))
            .collect();
        assert_eq!(
            par_merge_sort(elements.clone(), &by_bucket),
            merge_sort(elements, &by_bucket)
        );
    }
}
