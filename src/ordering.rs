//! Ordering predicates.
//!
//! Every sorted view in this crate is sorted under an [`OrderingPredicate`]:
//! a strict weak ordering expressed as a single "is ordered before" test.
//! The predicate is supplied once, when a view or container is built, and is
//! never mutated afterwards.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ```text
//! !precedes(a, a)                                      // irreflexive
//! precedes(a, b) => !precedes(b, a)                    // asymmetric
//! precedes(a, b) && precedes(b, c) => precedes(a, c)   // transitive
//! ```
//!
//! Violating these laws does not cause memory unsafety or panics. Sorting on
//! construction still yields some permutation of the input, but every search
//! built on top of the predicate may return meaningless positions.
//!
//! # Examples
//!
//! ```rust
//! use sorted::ordering::{ByKey, NaturalOrder, OrderingPredicate, Reversed};
//!
//! assert!(NaturalOrder.precedes(&1, &2));
//! assert!(Reversed(NaturalOrder).precedes(&2, &1));
//!
//! let by_length = ByKey(|word: &&str| word.len());
//! assert!(by_length.precedes(&"ox", &"cat"));
//!
//! // Any closure taking two references works too
//! let descending = |lhs: &i32, rhs: &i32| lhs > rhs;
//! assert!(descending.precedes(&3, &1));
//! ```

use std::cmp::Ordering;

/// A strict weak ordering over `T`, expressed as "`lhs` is ordered before `rhs`".
pub trait OrderingPredicate<T: ?Sized> {
    /// Returns `true` if `lhs` is ordered strictly before `rhs`.
    fn precedes(&self, lhs: &T, rhs: &T) -> bool;

    /// Derives a total [`Ordering`] from [`precedes`](Self::precedes).
    ///
    /// Elements for which neither direction holds are reported as
    /// [`Ordering::Equal`]; they are *equivalent* under the predicate, which
    /// does not imply `lhs == rhs`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted::ordering::{ByKey, OrderingPredicate};
    /// use std::cmp::Ordering;
    ///
    /// let case_insensitive = ByKey(|word: &String| word.to_lowercase());
    /// assert_eq!(
    ///     case_insensitive.compare(&"Rust".to_string(), &"rust".to_string()),
    ///     Ordering::Equal
    /// );
    /// ```
    #[inline]
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        if self.precedes(lhs, rhs) {
            Ordering::Less
        } else if self.precedes(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns `true` if neither element is ordered before the other.
    #[inline]
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        !self.precedes(lhs, rhs) && !self.precedes(rhs, lhs)
    }
}

impl<T, F> OrderingPredicate<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// The `<` ordering of [`PartialOrd`].
///
/// This is the predicate used by every constructor that does not take one
/// explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> OrderingPredicate<T> for NaturalOrder {
    #[inline]
    fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// Reverses another predicate.
///
/// # Examples
///
/// ```rust
/// use sorted::ordering::{NaturalOrder, OrderingPredicate, Reversed};
///
/// let descending = Reversed(NaturalOrder);
/// assert!(descending.precedes(&"b", &"a"));
/// assert!(!descending.precedes(&"a", &"b"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<P>(pub P);

impl<T: ?Sized, P: OrderingPredicate<T>> OrderingPredicate<T> for Reversed<P> {
    #[inline]
    fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        self.0.precedes(rhs, lhs)
    }
}

/// Orders elements by the natural order of a key extracted from each one.
///
/// The key function is called twice per comparison, so it should be cheap.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey<F>(pub F);

impl<T, K, F> OrderingPredicate<T> for ByKey<F>
where
    T: ?Sized,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    #[inline]
    fn precedes(&self, lhs: &T, rhs: &T) -> bool {
        (self.0)(lhs) < (self.0)(rhs)
    }
}

static_assertions::assert_eq_size!(NaturalOrder, ());
static_assertions::assert_impl_all!(NaturalOrder: Send, Sync, Copy);
