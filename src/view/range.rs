//! Integer ranges as ordered views.
//!
//! A half-open integer range is trivially sorted under `<`. Its indices are
//! the integers themselves, so `(3..10).insertion_index(&5)` is `5`, not an
//! offset. A range whose start exceeds its end is treated as empty.

use std::ops::Range;

use super::{OrderedView, RandomAccessView};
use crate::search::{Iterative, SearchStrategy};

macro_rules! impl_ordered_view_for_range {
    ($($integer:ty),* $(,)?) => {
        $(
            impl OrderedView for Range<$integer> {
                type Element = $integer;
                type Index = $integer;
                type ElementRef<'a> = $integer;

                #[inline]
                fn start_index(&self) -> $integer {
                    self.start
                }

                #[inline]
                fn end_index(&self) -> $integer {
                    self.end.max(self.start)
                }

                #[inline]
                fn index_after(&self, index: $integer) -> $integer {
                    index + 1
                }

                #[inline]
                fn element_at(&self, index: $integer) -> $integer {
                    debug_assert!(
                        self.start <= index && index < self.end,
                        "index {} out of range {:?}",
                        index,
                        self
                    );
                    index
                }

                #[inline]
                fn precedes(&self, lhs: &$integer, rhs: &$integer) -> bool {
                    lhs < rhs
                }

                #[inline]
                fn len(&self) -> usize {
                    self.distance(self.start_index(), self.end_index())
                }

                #[inline]
                fn insertion_index(&self, element: &$integer) -> $integer {
                    Iterative::insertion_index(self, element)
                }
            }

            impl RandomAccessView for Range<$integer> {
                #[inline]
                fn index_before(&self, index: $integer) -> $integer {
                    index - 1
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn index_offset(&self, index: $integer, offset: usize) -> $integer {
                    (index as i128 + offset as i128) as $integer
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn distance(&self, from: $integer, to: $integer) -> usize {
                    debug_assert!(from <= to, "distance from {from} to {to} is negative");
                    (to as i128 - from as i128) as usize
                }
            }
        )*
    };
}

impl_ordered_view_for_range!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
