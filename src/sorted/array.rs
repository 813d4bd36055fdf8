//! Construction and mutation of [`SortedArray`].

use std::ops::{Bound, RangeBounds};

use super::{Sorted, SortedArray, merge};
use crate::error::SortedError;
use crate::ordering::{NaturalOrder, OrderingPredicate};
use crate::view::OrderedView;

impl<T: PartialOrd> SortedArray<T, NaturalOrder> {
    /// Creates an empty array ordered by `<`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::SortedArray;
    ///
    /// let mut array = SortedArray::new();
    /// assert_eq!(array.insert(10), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::from_sorted_storage(Vec::new(), NaturalOrder)
    }

    /// Creates an array from elements in any order, sorting them by `<`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::SortedArray;
    ///
    /// let array = SortedArray::from_unsorted(["a", "c", "b"]);
    /// assert_eq!(array.as_slice(), &["a", "b", "c"]);
    /// ```
    pub fn from_unsorted<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_unsorted_with(elements, NaturalOrder)
    }

    /// Creates an array from elements already sorted by `<`. O(n).
    ///
    /// # Preconditions
    ///
    /// `elements` must be sorted non-descending under `<`. This is not
    /// checked; if violated, later searches return unspecified positions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::SortedArray;
    /// use sorted::search::SortedSearch;
    ///
    /// let array = SortedArray::from_sorted(1..10);
    /// assert_eq!(array.first_index_of(&9), Some(8));
    /// ```
    pub fn from_sorted<I: IntoIterator<Item = T>>(elements: I) -> Self {
        Self::from_sorted_with(elements, NaturalOrder)
    }
}

impl<T, F> SortedArray<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty array ordered by the closure `precedes`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::SortedArray;
    ///
    /// let mut array = SortedArray::with_predicate(|lhs: &i32, rhs: &i32| lhs > rhs);
    /// for value in [2, 1, 3] {
    ///     array.insert(value);
    /// }
    /// assert_eq!(array.as_slice(), &[3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_predicate(precedes: F) -> Self {
        Self::from_sorted_storage(Vec::new(), precedes)
    }

    /// Creates an array from elements in any order, sorting them by the
    /// closure `precedes`.
    pub fn from_unsorted_by<I: IntoIterator<Item = T>>(elements: I, precedes: F) -> Self {
        Self::from_unsorted_with(elements, precedes)
    }

    /// Creates an array from elements already sorted by the closure
    /// `precedes`. O(n).
    ///
    /// # Preconditions
    ///
    /// `elements` must be sorted non-descending under `precedes`. This is
    /// not checked; if violated, later searches return unspecified
    /// positions.
    pub fn from_sorted_by<I: IntoIterator<Item = T>>(elements: I, precedes: F) -> Self {
        Self::from_sorted_with(elements, precedes)
    }
}

impl<T, P> SortedArray<T, P>
where
    P: OrderingPredicate<T>,
{
    /// Creates an empty array ordered by `ordering`.
    #[inline]
    #[must_use]
    pub const fn with_ordering(ordering: P) -> Self {
        Self::from_sorted_storage(Vec::new(), ordering)
    }

    /// Creates an array from elements in any order, sorting them once by
    /// `ordering`. O(n log n).
    ///
    /// The sort is stable: equivalent elements keep their input order.
    /// Only `precedes` is consulted, and an ordering that breaks the strict
    /// weak ordering laws never makes this panic; the array then holds the
    /// input elements in an unspecified order.
    pub fn from_unsorted_with<I: IntoIterator<Item = T>>(elements: I, ordering: P) -> Self {
        let storage = merge::merge_sort(elements.into_iter().collect(), &ordering);
        log::trace!("sorted {} unsorted elements on construction", storage.len());
        Self::from_sorted_storage(storage, ordering)
    }

    /// Creates an array from elements already sorted by `ordering`. O(n).
    ///
    /// # Preconditions
    ///
    /// `elements` must be sorted non-descending under `ordering`. Checking
    /// this would cost a full pass, so it is never done; if violated, later
    /// searches return unspecified positions (a logic error, not memory
    /// unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::ordering::NaturalOrder;
    /// use sorted::SortedArray;
    ///
    /// // Not a valid sorted array: the input is trusted as-is.
    /// let array = SortedArray::from_sorted_with([3, 2, 1], NaturalOrder);
    /// assert_eq!(array.as_slice(), &[3, 2, 1]);
    /// ```
    pub fn from_sorted_with<I: IntoIterator<Item = T>>(elements: I, ordering: P) -> Self {
        let storage: Vec<T> = elements.into_iter().collect();
        log::trace!("adopted {} presorted elements", storage.len());
        Self::from_sorted_storage(storage, ordering)
    }

    /// Creates an array from elements in any order, sorting the halves of
    /// large inputs on the rayon pool.
    ///
    /// Produces exactly what [`from_unsorted_with`](Self::from_unsorted_with)
    /// would, including the order of equivalent elements.
    #[cfg(feature = "rayon")]
    pub fn par_from_unsorted_with<I: IntoIterator<Item = T>>(elements: I, ordering: P) -> Self
    where
        T: Send,
        P: Sync,
    {
        let storage = merge::par_merge_sort(elements.into_iter().collect(), &ordering);
        log::trace!("sorted {} unsorted elements in parallel", storage.len());
        Self::from_sorted_storage(storage, ordering)
    }

    /// Inserts `element` at a position that keeps the array sorted and
    /// returns that position.
    ///
    /// If equivalent elements are already present, `element` may land
    /// before, between or after them.
    ///
    /// # Complexity
    ///
    /// O(log n) to find the position, O(n) to shift the elements after it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::SortedArray;
    ///
    /// let mut array = SortedArray::from_unsorted([1, 2, 3, 5]);
    /// assert_eq!(array.insert(4), 3);
    /// assert_eq!(array.as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert(&mut self, element: T) -> usize {
        let index = self.insertion_index(&element);
        self.storage.insert(index, element);
        log::trace!("inserted at {index}, length now {}", self.storage.len());
        index
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let element = self.storage.remove(index);
        log::trace!("removed at {index}, length now {}", self.storage.len());
        element
    }

    /// Removes and returns the element at `index`, or reports why it cannot.
    ///
    /// # Errors
    ///
    /// Returns [`SortedError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::{SortedArray, SortedError};
    ///
    /// let mut array = SortedArray::from_unsorted([2, 1]);
    /// assert_eq!(array.try_remove(0), Ok(1));
    /// assert_eq!(
    ///     array.try_remove(1),
    ///     Err(SortedError::IndexOutOfBounds { index: 1, length: 1 })
    /// );
    /// ```
    pub fn try_remove(&mut self, index: usize) -> Result<T, SortedError> {
        let length = self.storage.len();
        if index >= length {
            return Err(SortedError::IndexOutOfBounds { index, length });
        }
        Ok(self.remove(index))
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is reversed or extends past the end.
    pub fn remove_subrange<R: RangeBounds<usize>>(&mut self, range: R) {
        let removed = self.storage.drain(range).count();
        log::trace!("removed {removed} elements, length now {}", self.storage.len());
    }

    /// Removes the elements in `range`, or reports why it cannot.
    ///
    /// # Errors
    ///
    /// Returns [`SortedError::InvalidSubrange`] if `range` is reversed or
    /// extends past the end; the array is left unchanged.
    pub fn try_remove_subrange<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<(), SortedError> {
        let length = self.storage.len();
        let start = match range.start_bound() {
            Bound::Included(&start) => Some(start),
            Bound::Excluded(&start) => start.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.checked_add(1),
            Bound::Excluded(&end) => Some(end),
            Bound::Unbounded => Some(length),
        };
        match (start, end) {
            (Some(start), Some(end)) if start <= end && end <= length => {
                self.remove_subrange(start..end);
                Ok(())
            }
            (start, end) => Err(SortedError::InvalidSubrange {
                start: start.unwrap_or(usize::MAX),
                end: end.unwrap_or(usize::MAX),
                length,
            }),
        }
    }

    /// Removes every element and releases the allocation.
    pub fn remove_all(&mut self) {
        self.storage = Vec::new();
        log::trace!("removed all elements");
    }

    /// Removes every element, keeping the allocation for reuse.
    pub fn remove_all_keeping_capacity(&mut self) {
        self.storage.clear();
        log::trace!("removed all elements, capacity {}", self.storage.capacity());
    }

    /// The number of elements the array can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Releases the sorted elements.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

impl<T, P> Default for SortedArray<T, P>
where
    P: OrderingPredicate<T> + Default,
{
    fn default() -> Self {
        Self::with_ordering(P::default())
    }
}

impl<T: PartialOrd> FromIterator<T> for SortedArray<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted(iter)
    }
}

/// Sorts the new elements, then merges them into the existing ones.
///
/// Existing elements keep their relative order; new elements land after any
/// existing elements equivalent to them.
impl<T, P> Extend<T> for SortedArray<T, P>
where
    P: OrderingPredicate<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let added: Vec<T> = iter.into_iter().collect();
        if added.is_empty() {
            return;
        }
        let added_length = added.len();
        let added = merge::merge_sort(added, &self.ordering);
        let existing = std::mem::take(&mut self.storage);
        self.storage = merge::merge(existing, added, &self.ordering);
        log::trace!(
            "extended by {added_length} elements, length now {}",
            self.storage.len()
        );
    }
}

impl<T, P> IntoIterator for SortedArray<T, P> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<T, P> From<SortedArray<T, P>> for Vec<T> {
    fn from(array: SortedArray<T, P>) -> Self {
        array.storage
    }
}

impl<T: PartialOrd> From<Vec<T>> for SortedArray<T, NaturalOrder> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_unsorted(elements)
    }
}

impl<T, P: OrderingPredicate<T>> Sorted<Vec<T>, P> {
    /// Keeps only the elements for which `keep` returns `true`.
    ///
    /// Removal never reorders, so the array stays sorted.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.storage.retain(keep);
    }
}

#[cfg(feature = "serde")]
struct SortedArrayVisitor<T, P> {
    marker: std::marker::PhantomData<(T, P)>,
}

#[cfg(feature = "serde")]
impl<T, P> SortedArrayVisitor<T, P> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T, P> serde::de::Visitor<'de> for SortedArrayVisitor<T, P>
where
    T: serde::Deserialize<'de>,
    P: OrderingPredicate<T> + Default,
{
    type Value = SortedArray<T, P>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(SortedArray::from_unsorted_with(elements, P::default()))
    }
}

/// Deserializes from a sequence in any order.
///
/// The input is sorted once under `P::default()`, so a sequence edited by
/// hand cannot produce an unsorted array.
#[cfg(feature = "serde")]
impl<'de, T, P> serde::Deserialize<'de> for SortedArray<T, P>
where
    T: serde::Deserialize<'de>,
    P: OrderingPredicate<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedArrayVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortedSearch;
    use rstest::rstest;

    #[rstest]
    fn test_new_is_empty() {
        let array: SortedArray<i32> = SortedArray::new();
        assert!(array.is_empty());
        assert_eq!(array.len(), 0);
    }

    #[rstest]
    fn test_from_unsorted_sorts_stably() {
        let by_first = |lhs: &(i32, char), rhs: &(i32, char)| lhs.0 < rhs.0;
        let array =
            SortedArray::from_unsorted_by([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')], by_first);
        assert_eq!(array.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_from_unsorted_with_inconsistent_predicate_does_not_panic() {
        // Not transitive in its incomparability, so not a strict weak ordering.
        let within_ten = |lhs: &i64, rhs: &i64| lhs + 10 < *rhs;
        let elements: Vec<i64> = (0..500_i64).map(|value| (value * 7919) % 1000).collect();

        let array = SortedArray::from_unsorted_by(elements.clone(), within_ten);

        let mut kept = array.into_vec();
        let mut expected = elements;
        kept.sort_unstable();
        expected.sort_unstable();
        assert_eq!(kept, expected);
    }

    #[rstest]
    fn test_extend_with_inconsistent_predicate_does_not_panic() {
        let within_ten = |lhs: &i64, rhs: &i64| lhs + 10 < *rhs;
        let mut array = SortedArray::from_unsorted_by((0..200_i64).rev(), within_ten);
        array.extend((0..300_i64).map(|value| (value * 37) % 250));
        assert_eq!(array.len(), 500);
    }

    #[rstest]
    fn test_remove_all_releases_capacity() {
        let mut array = SortedArray::from_unsorted(0..100);
        array.remove_all();
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 0);
    }

    #[rstest]
    fn test_remove_all_keeping_capacity() {
        let mut array = SortedArray::from_unsorted(0..100);
        array.remove_all_keeping_capacity();
        assert!(array.is_empty());
        assert!(array.capacity() >= 100);
    }

    #[rstest]
    #[case(Bound::Included(0), Bound::Excluded(2), &[3, 4])]
    #[case(Bound::Included(1), Bound::Included(2), &[1, 4])]
    #[case(Bound::Unbounded, Bound::Unbounded, &[])]
    fn test_remove_subrange(
        #[case] start: Bound<usize>,
        #[case] end: Bound<usize>,
        #[case] expected: &[i32],
    ) {
        let mut array = SortedArray::from_unsorted([4, 3, 2, 1]);
        array.try_remove_subrange((start, end)).unwrap();
        assert_eq!(array.as_slice(), expected);
    }

    #[rstest]
    fn test_try_remove_subrange_rejects_reversed_range() {
        let mut array = SortedArray::from_unsorted([1, 2, 3]);
        #[allow(clippy::reversed_empty_ranges)]
        let result = array.try_remove_subrange(2..1);
        assert_eq!(
            result,
            Err(SortedError::InvalidSubrange {
                start: 2,
                end: 1,
                length: 3
            })
        );
        assert_eq!(array.len(), 3);
    }

    #[rstest]
    fn test_try_remove_subrange_rejects_overflowing_bound() {
        let mut array = SortedArray::from_unsorted([1, 2, 3]);
        let result = array.try_remove_subrange(..=usize::MAX);
        assert!(matches!(result, Err(SortedError::InvalidSubrange { .. })));
    }

    #[rstest]
    #[should_panic]
    fn test_remove_out_of_bounds_panics() {
        let mut array = SortedArray::from_unsorted([1]);
        array.remove(1);
    }

    #[rstest]
    fn test_extend_keeps_order() {
        let mut array = SortedArray::from_unsorted([1, 5, 9]);
        array.extend([7, 0, 5]);
        assert_eq!(array.as_slice(), &[0, 1, 5, 5, 7, 9]);
        assert_eq!(array.first_index_of(&5), Some(2));
    }

    #[rstest]
    fn test_extend_places_new_elements_after_equivalents() {
        let by_first = |lhs: &(i32, char), rhs: &(i32, char)| lhs.0 < rhs.0;
        let mut array = SortedArray::from_unsorted_by([(1, 'a'), (2, 'b')], by_first);
        array.extend([(2, 'c'), (1, 'd'), (0, 'e')]);
        assert_eq!(
            array.as_slice(),
            &[(0, 'e'), (1, 'a'), (1, 'd'), (2, 'b'), (2, 'c')]
        );
    }

    #[rstest]
    fn test_retain_stays_sorted() {
        let mut array = SortedArray::from_unsorted(0..10);
        array.retain(|value| value % 3 == 0);
        assert_eq!(array.as_slice(), &[0, 3, 6, 9]);
        assert_eq!(array.insert(4), 2);
    }

    #[rstest]
    fn test_default_uses_default_ordering() {
        let array: SortedArray<u8> = SortedArray::default();
        assert!(array.is_empty());
    }

    #[rstest]
    fn test_conversions() {
        let array: SortedArray<i32> = vec![3, 1, 2].into();
        let collected: SortedArray<i32> = [3, 1, 2].into_iter().collect();
        assert_eq!(array, collected);
        let elements: Vec<i32> = array.into();
        assert_eq!(elements, vec![1, 2, 3]);
    }
}

#[cfg(all(test, feature = "rayon"))]
mod rayon_tests {
    use super::*;
    use rstest::rstest;

    fn keyed(length: usize) -> Vec<(usize, usize)> {
        (0..length)
            .map(|position| ((position * 7919) % 7, position))
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(10)]
    #[case(1000)]
    #[case(20_000)]
    fn test_par_from_unsorted_with_matches_sequential(#[case] length: usize) {
        let by_key = |lhs: &(usize, usize), rhs: &(usize, usize)| lhs.0 < rhs.0;
        let sequential = SortedArray::from_unsorted_with(keyed(length), by_key);
        let parallel = SortedArray::par_from_unsorted_with(keyed(length), by_key);
        assert_eq!(parallel, sequential);
    }

    #[rstest]
    fn test_par_from_unsorted_with_is_stable() {
        let by_first = |lhs: &(i32, char), rhs: &(i32, char)| lhs.0 < rhs.0;
        let array =
            SortedArray::par_from_unsorted_with([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')], by_first);
        assert_eq!(array.as_slice(), &[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);

        let by_key = |lhs: &(usize, usize), rhs: &(usize, usize)| lhs.0 < rhs.0;
        let large = SortedArray::par_from_unsorted_with(keyed(20_000), by_key);
        assert!(large.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[rstest]
    fn test_par_from_unsorted_with_natural_order() {
        let array = SortedArray::par_from_unsorted_with((0..10_000).rev(), NaturalOrder);
        assert_eq!(array.as_slice(), (0..10_000).collect::<Vec<_>>().as_slice());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::ordering::Reversed;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let array: SortedArray<i32> = SortedArray::new();
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[]");
    }

    #[rstest]
    fn test_serialize_in_sorted_order() {
        let array = SortedArray::from_unsorted([3, 1, 2]);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_sorts_input() {
        let array: SortedArray<i32> = serde_json::from_str("[5,1,4,1]").unwrap();
        assert_eq!(array.as_slice(), &[1, 1, 4, 5]);
    }

    #[rstest]
    fn test_deserialize_uses_default_ordering() {
        let array: SortedArray<i32, Reversed<NaturalOrder>> =
            serde_json::from_str("[1,3,2]").unwrap();
        assert_eq!(array.as_slice(), &[3, 2, 1]);
    }

    #[rstest]
    fn test_roundtrip_strings() {
        let original = SortedArray::from_unsorted(["world".to_string(), "hello".to_string()]);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#"["hello","world"]"#);
        let restored: SortedArray<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
