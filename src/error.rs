//! Error types.
//!
//! Searching never fails: a missing element is reported as `None`. The
//! errors here cover the two places where a caller hands in something that
//! can be checked cheaply: a strategy name, and a position to remove from a
//! [`SortedArray`](crate::SortedArray) through its `try_*` methods.

use std::fmt;

/// Represents an error from a fallible [`SortedArray`](crate::SortedArray)
/// removal.
///
/// The panicking counterparts (`remove`, `remove_subrange`) treat the same
/// conditions as programming errors.
///
/// # Examples
///
/// ```rust
/// use sorted::SortedError;
///
/// let error = SortedError::IndexOutOfBounds { index: 5, length: 3 };
/// assert_eq!(format!("{error}"), "index 5 is out of bounds for length 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortedError {
    /// A single position was not an element position.
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The number of elements at the time of the request.
        length: usize,
    },
    /// A range of positions was reversed or extended past the end.
    InvalidSubrange {
        /// The requested start position.
        start: usize,
        /// The requested end position (exclusive).
        end: usize,
        /// The number of elements at the time of the request.
        length: usize,
    },
}

impl fmt::Display for SortedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} is out of bounds for length {length}")
            }
            Self::InvalidSubrange { start, end, length } => write!(
                formatter,
                "subrange {start}..{end} is invalid for length {length}"
            ),
        }
    }
}

impl std::error::Error for SortedError {}

/// Represents an unknown [`Strategy`](crate::search::Strategy) name.
///
/// # Examples
///
/// ```rust
/// use sorted::search::Strategy;
///
/// let error = "bogo".parse::<Strategy>().unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "unknown search strategy \"bogo\" (expected one of: linear_scan, recursive_slicing, count_tracking, iterative)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError {
    /// The name that did not match any strategy.
    pub name: String,
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "unknown search strategy {:?} (expected one of: ", self.name)?;
        for (position, strategy) in crate::search::Strategy::ALL.iter().enumerate() {
            if position > 0 {
                formatter.write_str(", ")?;
            }
            formatter.write_str(strategy.name())?;
        }
        formatter.write_str(")")
    }
}

impl std::error::Error for ParseStrategyError {}
