//! Error types for sequence operations.

use core::fmt;

/// Index outside the valid range of a sequence.
///
/// Returned by positional accessors when `index >= len`, and by insertion
/// when `index > len`. The sequence is never modified on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange {
    /// The offending index.
    pub index: usize,
    /// Sequence length at the time of the call.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for OutOfRange {}

/// `first`/`last` called on a zero-length sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty;

impl fmt::Display for Empty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sequence is empty")
    }
}

impl std::error::Error for Empty {}
