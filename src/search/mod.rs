//! Search strategies over ordered views.
//!
//! Every strategy answers the same three positional queries on any
//! [`RandomAccessView`]:
//!
//! - `insertion_index`: *some* position keeping the view sorted; may stop
//!   at any element equivalent to the target
//! - `first_insertion_index`: the leftmost such position
//! - `last_insertion_index`: the rightmost such position, just past the
//!   last occurrence
//!
//! and derives `first_index_of`, `last_index_of` and `contains` from them.
//!
//! | Strategy             | Technique                                   | Cost       |
//! |----------------------|---------------------------------------------|------------|
//! | [`LinearScan`]       | forward scan, the reference implementation  | O(n)       |
//! | [`RecursiveSlicing`] | recursion on a freshly narrowed [`Subrange`](crate::view::Subrange) | O(log n) |
//! | [`CountTracking`]    | recursion on `(low, count)`                 | O(log n)   |
//! | [`Iterative`]        | loop on `(low, high, count)`                | O(log n)   |
//!
//! All strategies return identical first/last/contains results for every
//! sorted input. [`Iterative`] is the default used by [`SortedSearch`] and by
//! the adapters' [`insertion_index`](crate::view::OrderedView::insertion_index).
//!
//! # Examples
//!
//! ```rust
//! use sorted::search::{SortedSearch, Strategy};
//!
//! let range = 0_i32..7;
//! assert_eq!(range.first_insertion_index(&3), 3);
//! assert_eq!(range.last_insertion_index(&3), 4);
//!
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.first_index_of(&range, &6), Some(6));
//!     assert_eq!(strategy.last_index_of(&range, &7), None);
//! }
//! ```

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::ParseStrategyError;
use crate::view::RandomAccessView;

mod counting;
mod iterative;
mod linear;
mod slicing;

pub use counting::CountTracking;
pub use iterative::Iterative;
pub use linear::LinearScan;
pub use slicing::RecursiveSlicing;

/// A way of locating positions in a sorted [`RandomAccessView`].
///
/// Strategies are stateless marker types; every method is an associated
/// function taking the view to search.
pub trait SearchStrategy {
    /// A short, stable name, used by benchmarks and [`Strategy`].
    const NAME: &'static str;

    /// A position at which `element` could be inserted keeping `view`
    /// sorted. When equivalent elements exist, any of their positions or the
    /// position just past the last of them may be returned.
    fn insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index;

    /// The leftmost position at which `element` could be inserted: the index
    /// of its first occurrence, or where it would go if absent.
    fn first_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index;

    /// The rightmost position at which `element` could be inserted: the
    /// index just past its last occurrence.
    fn last_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index;

    /// The index of the first element equal to `element`.
    fn first_index_of<V>(view: &V, element: &V::Element) -> Option<V::Index>
    where
        V: RandomAccessView,
        V::Element: PartialEq,
    {
        let index = Self::first_insertion_index(view, element);
        (index != view.end_index() && view.element_equals(index, element)).then_some(index)
    }

    /// The index of the last element equal to `element`.
    fn last_index_of<V>(view: &V, element: &V::Element) -> Option<V::Index>
    where
        V: RandomAccessView,
        V::Element: PartialEq,
    {
        let index = Self::last_insertion_index(view, element);
        if index == view.start_index() {
            return None;
        }
        let previous = view.index_before(index);
        view.element_equals(previous, element).then_some(previous)
    }

    /// Returns `true` if some element of `view` equals `element`.
    fn contains<V>(view: &V, element: &V::Element) -> bool
    where
        V: RandomAccessView,
        V::Element: PartialEq,
    {
        let index = Self::insertion_index(view, element);
        index != view.end_index() && view.element_equals(index, element)
    }
}

/// Runtime selection of a [`SearchStrategy`].
///
/// # Examples
///
/// ```rust
/// use sorted::search::Strategy;
///
/// let strategy: Strategy = "count_tracking".parse().unwrap();
/// assert_eq!(strategy, Strategy::CountTracking);
/// assert_eq!(Strategy::default(), Strategy::Iterative);
/// assert_eq!(strategy.insertion_index(&(0_i32..10), &4), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// [`LinearScan`]
    LinearScan,
    /// [`RecursiveSlicing`]
    RecursiveSlicing,
    /// [`CountTracking`]
    CountTracking,
    /// [`Iterative`]
    #[default]
    Iterative,
}

macro_rules! dispatch {
    ($strategy:expr, $function:ident($($argument:expr),*)) => {
        match $strategy {
            Strategy::LinearScan => LinearScan::$function($($argument),*),
            Strategy::RecursiveSlicing => RecursiveSlicing::$function($($argument),*),
            Strategy::CountTracking => CountTracking::$function($($argument),*),
            Strategy::Iterative => Iterative::$function($($argument),*),
        }
    };
}

impl Strategy {
    /// Every strategy, the linear reference scan first.
    pub const ALL: [Self; 4] = [
        Self::LinearScan,
        Self::RecursiveSlicing,
        Self::CountTracking,
        Self::Iterative,
    ];

    /// The binary search strategies.
    pub const BINARY: [Self; 3] = [Self::RecursiveSlicing, Self::CountTracking, Self::Iterative];

    /// The [`SearchStrategy::NAME`] of the selected strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearScan => LinearScan::NAME,
            Self::RecursiveSlicing => RecursiveSlicing::NAME,
            Self::CountTracking => CountTracking::NAME,
            Self::Iterative => Iterative::NAME,
        }
    }

    /// See [`SearchStrategy::insertion_index`].
    pub fn insertion_index<V: RandomAccessView>(self, view: &V, element: &V::Element) -> V::Index {
        dispatch!(self, insertion_index(view, element))
    }

    /// See [`SearchStrategy::first_insertion_index`].
    pub fn first_insertion_index<V: RandomAccessView>(
        self,
        view: &V,
        element: &V::Element,
    ) -> V::Index {
        dispatch!(self, first_insertion_index(view, element))
    }

    /// See [`SearchStrategy::last_insertion_index`].
    pub fn last_insertion_index<V: RandomAccessView>(
        self,
        view: &V,
        element: &V::Element,
    ) -> V::Index {
        dispatch!(self, last_insertion_index(view, element))
    }

    /// See [`SearchStrategy::first_index_of`].
    pub fn first_index_of<V>(self, view: &V, element: &V::Element) -> Option<V::Index>
    where
        V: RandomAccessView,
        V::Element: PartialEq,
    {
        dispatch!(self, first_index_of(view, element))
    }

    /// See [`SearchStrategy::last_index_of`].
    pub fn last_index_of<V>(self, view: &V, element: &V::Element) -> Option<V::Index>
    where
        V: RandomAccessView,
        V::Element: PartialEq,
    {
        dispatch!(self, last_index_of(view, element))
    }

    /// See [`SearchStrategy::contains`].
    pub fn contains<V>(self, view: &V, element: &V::Element) -> bool
    where
        V: RandomAccessView,
        V::Element: PartialEq,
    {
        dispatch!(self, contains(view, element))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| ParseStrategyError {
                name: name.to_owned(),
            })
    }
}

/// Binary search queries on every [`RandomAccessView`], using [`Iterative`].
///
/// # Examples
///
/// ```rust
/// use sorted::search::SortedSearch;
/// use sorted::SortedArray;
///
/// let array = SortedArray::from_unsorted([1, 4, 4, 4, 4, 4, 4, 4, 4, 3, 2]);
/// assert_eq!(array.first_index_of(&4), Some(3));
/// assert_eq!(array.last_index_of(&4), Some(10));
/// assert_eq!(array.equal_range(&4), 3..11);
/// assert!(!array.contains(&5));
/// ```
pub trait SortedSearch: RandomAccessView + Sized {
    /// See [`SearchStrategy::first_insertion_index`].
    #[inline]
    fn first_insertion_index(&self, element: &Self::Element) -> Self::Index {
        Iterative::first_insertion_index(self, element)
    }

    /// See [`SearchStrategy::last_insertion_index`].
    #[inline]
    fn last_insertion_index(&self, element: &Self::Element) -> Self::Index {
        Iterative::last_insertion_index(self, element)
    }

    /// See [`SearchStrategy::first_index_of`].
    #[inline]
    fn first_index_of(&self, element: &Self::Element) -> Option<Self::Index>
    where
        Self::Element: PartialEq,
    {
        Iterative::first_index_of(self, element)
    }

    /// See [`SearchStrategy::last_index_of`].
    #[inline]
    fn last_index_of(&self, element: &Self::Element) -> Option<Self::Index>
    where
        Self::Element: PartialEq,
    {
        Iterative::last_index_of(self, element)
    }

    /// See [`SearchStrategy::contains`].
    #[inline]
    fn contains(&self, element: &Self::Element) -> bool
    where
        Self::Element: PartialEq,
    {
        Iterative::contains(self, element)
    }

    /// The positions of every element equivalent to `element`; empty (and
    /// positioned where `element` would go) if there is none.
    #[inline]
    fn equal_range(&self, element: &Self::Element) -> Range<Self::Index> {
        self.first_insertion_index(element)..self.last_insertion_index(element)
    }
}

impl<V: RandomAccessView> SortedSearch for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_strategy_names_are_distinct() {
        let mut names: Vec<&str> = Strategy::ALL.iter().map(|strategy| strategy.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Strategy::ALL.len());
    }

    #[rstest]
    fn test_strategy_round_trips_through_its_name(
        #[values(
            Strategy::LinearScan,
            Strategy::RecursiveSlicing,
            Strategy::CountTracking,
            Strategy::Iterative
        )]
        strategy: Strategy,
    ) {
        assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
    }

    #[rstest]
    fn test_unknown_strategy_name_is_rejected() {
        let error = "galloping".parse::<Strategy>().unwrap_err();
        assert_eq!(error.name, "galloping");
    }

    #[rstest]
    fn test_default_strategy_is_iterative() {
        assert_eq!(Strategy::default(), Strategy::Iterative);
    }

    #[rstest]
    fn test_binary_excludes_linear_scan() {
        assert!(!Strategy::BINARY.contains(&Strategy::LinearScan));
    }

    #[rstest]
    fn test_range_queries_for_every_strategy(
        #[values(
            Strategy::LinearScan,
            Strategy::RecursiveSlicing,
            Strategy::CountTracking,
            Strategy::Iterative
        )]
        strategy: Strategy,
    ) {
        let range = 0_i32..7;
        assert_eq!(strategy.insertion_index(&range, &-1), 0);
        assert_eq!(strategy.insertion_index(&range, &8), 7);
        for value in 0..7 {
            assert_eq!(strategy.insertion_index(&range, &value), value);
            assert_eq!(strategy.first_insertion_index(&range, &value), value);
            assert_eq!(strategy.last_insertion_index(&range, &value), value + 1);
            assert_eq!(strategy.first_index_of(&range, &value), Some(value));
            assert_eq!(strategy.last_index_of(&range, &value), Some(value));
            assert!(strategy.contains(&range, &value));
        }
        assert!(!strategy.contains(&range, &7));
        assert_eq!(strategy.last_index_of(&range, &-1), None);
    }

    #[rstest]
    fn test_equal_range_on_integer_range() {
        let range = 0_i32..7;
        assert_eq!(range.equal_range(&3), 3..4);
        assert_eq!(range.equal_range(&9), 7..7);
    }
}
