//! Knuth-Morris-Pratt search over slices of any comparable element type.
//!
//! This crate provides:
//! - [`PatternMatcher`]: a pattern bound to its skip table, searched with
//!   [`find`](PatternMatcher::find) / [`find_from`](PatternMatcher::find_from)
//! - [`SkipTable`]: the failure table, exposed read-only for inspection
//! - [`Matches`]: every occurrence, overlapping ones included
//!
//! # Complexity
//!
//! Building a matcher is O(m) in the pattern. Each search is O(n) in the
//! corpus and never revisits a corpus element it has already matched.
//! Elements only need [`PartialEq`]; byte patterns additionally get a
//! `memchr` fast path via [`PatternMatcher::find_bytes`].
//!
//! ```
//! use kmps::build_matcher;
//!
//! let matcher = build_matcher(&b"aa"[..]);
//! assert_eq!(matcher.find(b"aazzzaaa"), Some(0));
//! assert_eq!(matcher.find_from(b"aazzzaaa", 1), Some(5));
//! assert_eq!(matcher.find_from(b"aazzzaaa", -2), Some(6));
//! ```
//!
//! # Logging
//!
//! Construction and searches emit `tracing` spans and events at `debug` and
//! `trace` level. The crate never installs a subscriber.

mod error;
mod matcher;
mod search;
mod skip_table;

pub use error::SkipTableError;
pub use matcher::{Matches, PatternMatcher};
pub use skip_table::SkipTable;

/// Bind `pattern` to a new [`PatternMatcher`].
pub fn build_matcher<T: PartialEq>(pattern: impl Into<Box<[T]>>) -> PatternMatcher<T> {
    PatternMatcher::new(pattern)
}
