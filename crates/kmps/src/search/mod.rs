//! The KMP scan over a corpus.
//!
//! Crate-private on purpose: the loop trusts that `table` was built from
//! `pattern`, and only [`PatternMatcher`](crate::PatternMatcher) can
//! guarantee that pairing.
//!
//! The corpus cursor never moves backwards. After a mismatch with `matched`
//! elements already equal, the pattern slides right by
//! `matched - table[matched]` and resumes comparing at `table[matched]`,
//! so corpus elements already known to match are not compared again.

use crate::SkipTable;

/// Resolve a signed start offset against a corpus of `corpus_len` elements.
///
/// - `offset >= corpus_len`: no match is possible, returns `None`.
/// - `offset < 0`: counts back from the end, clamped at `0`.
pub(crate) fn normalize_offset(offset: isize, corpus_len: usize) -> Option<usize> {
    if offset >= 0 {
        let start = offset.unsigned_abs();
        (start < corpus_len).then_some(start)
    } else {
        Some(corpus_len.saturating_sub(offset.unsigned_abs()))
    }
}

/// Finds the next position in `haystack` equal to `needle`.
///
/// Used whenever no pattern element is matched, so the scan can jump straight
/// to the next candidate alignment. Implementations return an index into
/// `haystack`.
pub(crate) type Seek<T> = fn(&T, &[T]) -> Option<usize>;

/// Element-by-element seek, valid for any `T: PartialEq`.
pub(crate) fn seek_linear<T: PartialEq>(needle: &T, haystack: &[T]) -> Option<usize> {
    haystack.iter().position(|item| item == needle)
}

/// `memchr`-backed seek for byte corpora.
#[allow(
    clippy::trivially_copy_pass_by_ref,
    reason = "signature must match Seek<u8>"
)]
pub(crate) fn seek_byte(needle: &u8, haystack: &[u8]) -> Option<usize> {
    memchr::memchr(*needle, haystack)
}

/// Resumable scan position: corpus alignment plus matched prefix length.
///
/// After reporting a match the scan shifts by `m - table[m]`, so the next
/// call finds overlapping occurrences too.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Corpus index the pattern's first element is aligned with.
    pos: usize,
    /// Number of pattern elements already known to match at `pos`.
    matched: usize,
}

impl Scan {
    pub(crate) const fn at(pos: usize) -> Self {
        Self { pos, matched: 0 }
    }

    /// Advance to the next occurrence of a non-empty `pattern`.
    pub(crate) fn next_match<T: PartialEq>(
        &mut self,
        pattern: &[T],
        table: &SkipTable,
        corpus: &[T],
        seek: Seek<T>,
    ) -> Option<usize> {
        debug_assert!(!pattern.is_empty(), "empty pattern reached the scan loop");
        let len = pattern.len();
        let last = corpus.len().checked_sub(len)?;

        while self.pos <= last {
            if self.matched == 0 {
                match seek(&pattern[0], &corpus[self.pos..=last]) {
                    Some(skip) => self.pos += skip,
                    None => {
                        self.pos = corpus.len();
                        return None;
                    }
                }
            }

            if pattern[self.matched] == corpus[self.pos + self.matched] {
                self.matched += 1;
                if self.matched == len {
                    let found = self.pos;
                    self.shift(table);
                    return Some(found);
                }
            } else if self.matched > 0 {
                self.shift(table);
            } else {
                self.pos += 1;
            }
        }

        None
    }

    /// Slide the pattern so its longest border lines up with the corpus.
    #[inline]
    fn shift(&mut self, table: &SkipTable) {
        let border = table.border(self.matched);
        self.pos += self.matched - border;
        self.matched = border;
    }
}

/// First occurrence of a non-empty `pattern` at or after `start`.
pub(crate) fn first_match<T: PartialEq>(
    pattern: &[T],
    table: &SkipTable,
    corpus: &[T],
    start: usize,
    seek: Seek<T>,
) -> Option<usize> {
    Scan::at(start).next_match(pattern, table, corpus, seek)
}

#[cfg(test)]
mod tests;
