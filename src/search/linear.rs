//! The linear reference scan.

use super::SearchStrategy;
use crate::view::{RandomAccessView, linear_insertion_index, linear_upper_index};

/// Scans forward from the start of the view. O(n).
///
/// Uses only forward traversal, so its answers do not depend on any
/// index arithmetic. The binary strategies are tested against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LinearScan;

impl SearchStrategy for LinearScan {
    const NAME: &'static str = "linear_scan";

    #[inline]
    fn insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        linear_insertion_index(view, element)
    }

    #[inline]
    fn first_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        linear_insertion_index(view, element)
    }

    #[inline]
    fn last_insertion_index<V: RandomAccessView>(view: &V, element: &V::Element) -> V::Index {
        linear_upper_index(view, element)
    }
}
