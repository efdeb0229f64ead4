//! Error types for rebuilding a matcher from stored parts.
//!
//! Searching itself cannot fail: every pattern, corpus, and offset has a
//! defined answer. The only failure is handing the crate a skip table that
//! was not built from the pattern it is paired with.

use thiserror::Error;

/// A skip table that does not belong to the pattern it was paired with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SkipTableError {
    /// The table has the wrong number of entries for the pattern.
    #[error("skip table has {found} entries, but a pattern of length {pattern_len} needs {expected}")]
    LengthMismatch {
        /// Length of the pattern the table was paired with.
        pattern_len: usize,
        /// Number of entries the pattern requires.
        expected: usize,
        /// Number of entries the table actually has.
        found: usize,
    },

    /// An entry differs from the border length computed from the pattern.
    #[error("skip table entry {index} is {found}, expected {expected}")]
    EntryMismatch {
        /// Index of the first differing entry.
        index: usize,
        /// Value computed from the pattern.
        expected: usize,
        /// Value found in the supplied table.
        found: usize,
    },
}
