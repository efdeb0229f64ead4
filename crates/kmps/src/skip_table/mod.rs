//! Failure table for Knuth-Morris-Pratt search.
//!
//! The table is shifted one slot to the right of the textbook failure
//! function: entry `j` holds the length of the longest proper border of
//! `pattern[..j]` (a prefix that is also a suffix), and entry `0` is a
//! padding sentinel. The search loop reads `table[j]` after matching `j`
//! elements, never `table[j - 1]`.
//!
//! # Layout
//!
//! ```text
//! pattern:  a  a  b  a  a  a
//! table:  0  0  1  0  1  2  2
//!         ^  ^              ^
//!         |  border("a")    border("aabaaa")
//!         sentinel
//! ```
//!
//! A pattern of length `m >= 1` produces `m + 1` entries. The empty pattern
//! produces `[0, 0]`.

use std::ops::Index;

use crate::SkipTableError;

/// Precomputed border lengths for one pattern.
///
/// Immutable once built. A table is only meaningful next to the exact
/// pattern it was built from, which is why the search entry points take a
/// [`PatternMatcher`](crate::PatternMatcher) rather than a loose table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct SkipTable {
    entries: Box<[usize]>,
}

impl SkipTable {
    /// Build the table for `pattern` in O(m).
    ///
    /// On a mismatch the candidate border falls back through shorter borders
    /// (`border = table[border]`) until one extends or none is left, so every
    /// entry is the *longest* border and the search never shifts past a match.
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        let mut entries = vec![0; Self::len_for(pattern.len())];
        let mut border = 0;

        for (j, item) in pattern.iter().enumerate().skip(1) {
            while border > 0 && pattern[border] != *item {
                border = entries[border];
            }
            if pattern[border] == *item {
                border += 1;
            }
            entries[j + 1] = border;
        }

        Self {
            entries: entries.into_boxed_slice(),
        }
    }

    /// Accept `entries` as the table of `pattern` if it is exactly the table
    /// [`build`](Self::build) would produce.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(pattern_len = pattern.len(), table_len = entries.len())
    )]
    pub(crate) fn verified<T: PartialEq>(
        pattern: &[T],
        entries: Box<[usize]>,
    ) -> Result<Self, SkipTableError> {
        let expected = Self::build(pattern);

        if entries.len() != expected.entries.len() {
            return Err(SkipTableError::LengthMismatch {
                pattern_len: pattern.len(),
                expected: expected.entries.len(),
                found: entries.len(),
            });
        }

        let mismatch = entries
            .iter()
            .zip(expected.iter())
            .enumerate()
            .find(|(_, (found, want))| found != want);
        if let Some((index, (&found, &expected))) = mismatch {
            tracing::debug!(index, expected, found, "rejecting skip table");
            return Err(SkipTableError::EntryMismatch {
                index,
                expected,
                found,
            });
        }

        Ok(Self { entries })
    }

    /// Number of entries needed for a pattern of `pattern_len` elements.
    const fn len_for(pattern_len: usize) -> usize {
        if pattern_len == 0 {
            2
        } else {
            pattern_len + 1
        }
    }

    /// Longest proper border of the first `matched` pattern elements.
    #[inline]
    pub(crate) fn border(&self, matched: usize) -> usize {
        self.entries[matched]
    }

    /// The raw entries, sentinel included.
    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }

    /// Number of entries, sentinel included: `max(m, 1) + 1`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; even the empty pattern's table holds two entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries, sentinel included.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.entries.iter()
    }
}

impl Index<usize> for SkipTable {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a SkipTable {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
