use pretty_assertions::assert_eq;

use super::{first_match, normalize_offset, seek_byte, seek_linear, Scan};
use crate::SkipTable;

fn find(pattern: &str, corpus: &str, start: usize) -> Option<usize> {
    let pattern = pattern.as_bytes();
    let table = SkipTable::build(pattern);
    let linear = first_match(pattern, &table, corpus.as_bytes(), start, seek_linear);
    let byte = first_match(pattern, &table, corpus.as_bytes(), start, seek_byte);
    assert_eq!(linear, byte, "seek strategies disagree");
    linear
}

// === Offset Normalization ===

#[test]
fn non_negative_offset_inside_corpus() {
    assert_eq!(normalize_offset(0, 8), Some(0));
    assert_eq!(normalize_offset(7, 8), Some(7));
}

#[test]
fn offset_at_or_past_end_is_rejected() {
    assert_eq!(normalize_offset(8, 8), None);
    assert_eq!(normalize_offset(100, 8), None);
    assert_eq!(normalize_offset(0, 0), None);
    assert_eq!(normalize_offset(isize::MAX, 8), None);
}

#[test]
fn negative_offset_counts_from_end() {
    assert_eq!(normalize_offset(-1, 8), Some(7));
    assert_eq!(normalize_offset(-2, 8), Some(6));
    assert_eq!(normalize_offset(-8, 8), Some(0));
}

#[test]
fn negative_offset_clamps_at_zero() {
    assert_eq!(normalize_offset(-9, 8), Some(0));
    assert_eq!(normalize_offset(-100, 0), Some(0));
    assert_eq!(normalize_offset(isize::MIN, 8), Some(0));
}

// === First Match ===

#[test]
fn finds_match_at_start() {
    assert_eq!(find("aa", "aaaaaa", 0), Some(0));
}

#[test]
fn finds_match_after_partial_matches() {
    assert_eq!(
        find("STING", "A STRING SEARCHING EXAMPLE CONSISTING OF TEXT", 0),
        Some(32)
    );
}

#[test]
fn finds_match_at_end() {
    assert_eq!(find("TEXT", "A STRING SEARCHING EXAMPLE CONSISTING OF TEXT", 0), Some(41));
}

#[test]
fn respects_start_position() {
    assert_eq!(find("aa", "aazzzaaa", 1), Some(5));
    assert_eq!(find("aa", "aazzzaaa", 6), Some(6));
    assert_eq!(find("aa", "aazzzaaa", 7), None);
}

#[test]
fn pattern_longer_than_corpus() {
    assert_eq!(find("zzzz", "zzz", 0), None);
    assert_eq!(find("a", "", 0), None);
}

#[test]
fn mismatch_after_long_partial_match_uses_border() {
    // A table holding border 1 instead of 2 after "aabaaa" shifts past 5.
    assert_eq!(find("aabaaaaa", "aaabaaabaaaaabb", 0), Some(5));
}

#[test]
fn no_match_with_near_misses() {
    let pattern = [1u32, 1, 0xF];
    let corpus = [1u32, 0xF, 1, 0xF];
    let table = SkipTable::build(&pattern);
    assert_eq!(first_match(&pattern, &table, &corpus, 0, seek_linear), None);
}

// === Resumable Scan ===

#[test]
fn scan_reports_overlapping_matches() {
    let pattern = b"aa";
    let table = SkipTable::build(pattern);
    let corpus = b"aaazaa";
    let mut scan = Scan::at(0);
    let found: Vec<_> =
        std::iter::from_fn(|| scan.next_match(pattern, &table, corpus, seek_byte)).collect();
    assert_eq!(found, vec![0, 1, 4]);
}

#[test]
fn scan_keeps_returning_none_when_exhausted() {
    let pattern = b"ab";
    let table = SkipTable::build(pattern);
    let mut scan = Scan::at(0);
    assert_eq!(scan.next_match(pattern, &table, b"xxab", seek_linear), Some(2));
    assert_eq!(scan.next_match(pattern, &table, b"xxab", seek_linear), None);
    assert_eq!(scan.next_match(pattern, &table, b"xxab", seek_linear), None);
}

#[test]
fn shift_after_match_reuses_whole_pattern_border() {
    let pattern = b"abab";
    let table = SkipTable::build(pattern);
    let mut scan = Scan::at(0);
    assert_eq!(scan.next_match(pattern, &table, b"ababab", seek_linear), Some(0));
    assert_eq!(scan, Scan { pos: 2, matched: 2 });
    assert_eq!(scan.next_match(pattern, &table, b"ababab", seek_linear), Some(2));
}
