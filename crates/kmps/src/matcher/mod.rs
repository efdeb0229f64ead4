//! A pattern bound to its precomputed skip table.
//!
//! [`PatternMatcher`] is the only way into the scan loop. Building the table
//! costs O(m) once; every search after that is O(n) in the corpus and reuses
//! the same table. The matcher never changes after construction, so one
//! instance can be shared across threads and searched concurrently.
//!
//! # Results
//!
//! Searches return `Some(index)` for the first element of the first
//! occurrence, or `None` when the pattern does not occur in the searched
//! range. Two rules are easy to get wrong:
//!
//! - The empty pattern matches at `0` for every corpus and every offset,
//!   including offsets past the end.
//! - Offsets are signed. A negative offset counts back from the end of the
//!   corpus and clamps at `0`; an offset at or past the end never matches.

use std::iter::FusedIterator;

use crate::search::{self, Scan, Seek};
use crate::{SkipTable, SkipTableError};

/// A pattern and its skip table, ready to search any number of corpora.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "MatcherParts<T>",
        bound(deserialize = "T: serde::Deserialize<'de> + PartialEq")
    )
)]
pub struct PatternMatcher<T> {
    pattern: Box<[T]>,
    skip_table: SkipTable,
}

impl<T: PartialEq> PatternMatcher<T> {
    /// Bind `pattern` and build its skip table.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(pattern_len = tracing::field::Empty)
    )]
    pub fn new(pattern: impl Into<Box<[T]>>) -> Self {
        let pattern = pattern.into();
        tracing::Span::current().record("pattern_len", pattern.len());
        let skip_table = SkipTable::build(&pattern[..]);
        Self {
            pattern,
            skip_table,
        }
    }

    /// Rebuild a matcher from a pattern and a previously exported table.
    ///
    /// The table must be exactly the one [`new`](Self::new) would build for
    /// `pattern`; anything else is rejected instead of producing wrong
    /// search results.
    pub fn from_parts(
        pattern: impl Into<Box<[T]>>,
        skip_table: impl Into<Box<[usize]>>,
    ) -> Result<Self, SkipTableError> {
        let pattern = pattern.into();
        let skip_table = SkipTable::verified(&pattern[..], skip_table.into())?;
        Ok(Self {
            pattern,
            skip_table,
        })
    }

    /// First occurrence in `corpus`, scanning from the start.
    pub fn find(&self, corpus: &[T]) -> Option<usize> {
        self.find_from(corpus, 0)
    }

    /// First occurrence in `corpus` at or after `offset`.
    ///
    /// A negative `offset` counts back from the end of `corpus` and clamps at
    /// `0`. An offset at or past the end returns `None`, unless the pattern
    /// is empty.
    pub fn find_from(&self, corpus: &[T], offset: isize) -> Option<usize> {
        self.find_with(corpus, offset, search::seek_linear)
    }

    /// Whether the pattern occurs anywhere in `corpus`.
    pub fn contains(&self, corpus: &[T]) -> bool {
        self.find(corpus).is_some()
    }

    /// Every occurrence in `corpus`, overlapping ones included, in order.
    ///
    /// The whole iteration is O(n): after each match the scan resumes from
    /// the pattern's own longest border instead of restarting.
    pub fn matches<'m, 'c>(&'m self, corpus: &'c [T]) -> Matches<'m, 'c, T> {
        Matches {
            matcher: self,
            corpus,
            scan: Scan::at(0),
            exhausted: false,
        }
    }

    fn find_with(&self, corpus: &[T], offset: isize, seek: Seek<T>) -> Option<usize> {
        if self.pattern.is_empty() {
            return Some(0);
        }

        let Some(start) = search::normalize_offset(offset, corpus.len()) else {
            tracing::trace!(offset, corpus_len = corpus.len(), "offset past end of corpus");
            return None;
        };

        let found = search::first_match(self.pattern(), &self.skip_table, corpus, start, seek);
        tracing::trace!(
            pattern_len = self.pattern.len(),
            corpus_len = corpus.len(),
            start,
            ?found,
            "search finished"
        );
        found
    }
}

impl<T> PatternMatcher<T> {
    /// The bound pattern.
    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    /// The precomputed skip table, for inspection or export.
    pub fn skip_table(&self) -> &SkipTable {
        &self.skip_table
    }
}

/// Byte patterns jump between candidate first bytes with `memchr`.
///
/// Results are identical to the generic [`find_from`](PatternMatcher::find_from).
impl PatternMatcher<u8> {
    /// First occurrence, jumping between candidate first bytes with `memchr`.
    pub fn find_bytes(&self, corpus: &[u8]) -> Option<usize> {
        self.find_bytes_from(corpus, 0)
    }

    /// First occurrence at or after `offset`, using the `memchr` jump.
    pub fn find_bytes_from(&self, corpus: &[u8], offset: isize) -> Option<usize> {
        self.find_with(corpus, offset, search::seek_byte)
    }

    /// Search a string by bytes. The result is a byte index.
    pub fn find_str(&self, corpus: &str) -> Option<usize> {
        self.find_bytes(corpus.as_bytes())
    }

    /// Search a string by bytes from a byte `offset`.
    pub fn find_str_from(&self, corpus: &str, offset: isize) -> Option<usize> {
        self.find_bytes_from(corpus.as_bytes(), offset)
    }
}

impl From<&str> for PatternMatcher<u8> {
    fn from(pattern: &str) -> Self {
        Self::new(pattern.as_bytes())
    }
}

/// Matches by `char`, so offsets and results count chars rather than bytes.
impl From<&str> for PatternMatcher<char> {
    fn from(pattern: &str) -> Self {
        Self::new(pattern.chars().collect::<Vec<_>>())
    }
}

/// Serialized form, checked by [`PatternMatcher::from_parts`] on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatcherParts<T> {
    pattern: Box<[T]>,
    skip_table: Box<[usize]>,
}

#[cfg(feature = "serde")]
impl<T: PartialEq> TryFrom<MatcherParts<T>> for PatternMatcher<T> {
    type Error = SkipTableError;

    fn try_from(parts: MatcherParts<T>) -> Result<Self, Self::Error> {
        Self::from_parts(parts.pattern, parts.skip_table)
    }
}

/// Iterator over every occurrence of a pattern in one corpus.
///
/// Created by [`PatternMatcher::matches`].
#[derive(Clone, Debug)]
pub struct Matches<'m, 'c, T> {
    matcher: &'m PatternMatcher<T>,
    corpus: &'c [T],
    scan: Scan,
    /// Only used by the empty pattern, which matches exactly once.
    exhausted: bool,
}

impl<T: PartialEq> Iterator for Matches<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let matcher = self.matcher;
        if matcher.pattern.is_empty() {
            if self.exhausted {
                return None;
            }
            self.exhausted = true;
            return Some(0);
        }

        self.scan.next_match(
            matcher.pattern(),
            &matcher.skip_table,
            self.corpus,
            search::seek_linear,
        )
    }
}

impl<T: PartialEq> FusedIterator for Matches<'_, '_, T> {}
