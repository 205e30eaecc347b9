//! Error types for the sorting entry points and dataset loading.

use std::fmt;
use std::io;

/// Broad classification of a [`SortError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed arguments outside the algorithm's contract.
    InvalidInput,
}

/// Errors returned by [`counting_sort`](crate::counting_sort) and
/// [`bci_sort`](crate::bci_sort).
///
/// Every variant is a contract violation by the caller. Nothing is retried or
/// recovered internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Counting sort needs a maximum key, and an empty sequence has none.
    EmptyInput,

    /// Counting sort only accepts keys `>= 0`.
    NegativeKey { index: usize, value: i64 },

    /// The largest key cannot be used as a table index on this platform.
    KeyRangeTooLarge { max: i64 },

    /// `left > right`, or `right` is not a valid index into the sequence.
    InvalidRange {
        left: usize,
        right: usize,
        len: usize,
    },
}

impl SortError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SortError::EmptyInput
            | SortError::NegativeKey { .. }
            | SortError::KeyRangeTooLarge { .. }
            | SortError::InvalidRange { .. } => ErrorKind::InvalidInput,
        }
    }
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::EmptyInput => write!(f, "empty input: no maximum key exists"),
            SortError::NegativeKey { index, value } => {
                write!(f, "negative key {} at index {}", value, index)
            }
            SortError::KeyRangeTooLarge { max } => {
                write!(f, "key range too large: cannot index a table for key {}", max)
            }
            SortError::InvalidRange { left, right, len } => {
                write!(
                    f,
                    "invalid range [{}, {}] for sequence of length {}",
                    left, right, len
                )
            }
        }
    }
}

impl std::error::Error for SortError {}

impl From<SortError> for io::Error {
    fn from(err: SortError) -> Self {
        match err.kind() {
            ErrorKind::InvalidInput => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}

/// Errors produced while reading a newline-delimited dataset.
#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),

    /// A non-blank line that is not a signed integer. `line` is 1-based.
    Parse { line: usize, content: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "i/o error: {}", err),
            DatasetError::Parse { line, content } => {
                write!(f, "line {}: not an integer: {:?}", line, content)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for DatasetError {
    fn from(err: io::Error) -> Self {
        DatasetError::Io(err)
    }
}
