// SPDX-FileCopyrightText: 2026 Calboard contributors
//
// SPDX-License-Identifier: Apache-2.0

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of the first `n` grapheme clusters of `s`.
pub fn width_upto(s: &str, n: usize) -> usize {
    if n == 0 || s.is_empty() {
        return 0;
    }
    match s.grapheme_indices(true).nth(n - 1) {
        Some((start, g)) => s[..start + g.len()].width(),
        None => s.width(),
    }
}

/// Byte range of the grapheme cluster at index `idx` in `s`, or None when
/// out of bounds.
pub fn grapheme_range(s: &str, idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(idx)
        .map(|(start, g)| start..start + g.len())
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_upto_ascii() {
        assert_eq!(width_upto("hello world", 5), 5);
        assert_eq!(width_upto("hello world", 100), 11);
        assert_eq!(width_upto("hello world", 0), 0);
        assert_eq!(width_upto("", 0), 0);
    }

    #[test]
    fn test_width_upto_wide_characters() {
        let s = "abc中文def";
        assert_eq!(width_upto(s, 4), "abc中".width());
        assert_eq!(width_upto(s, 8), s.width());
    }

    #[test]
    fn test_width_upto_emoji() {
        assert_eq!(width_upto("a😀b", 2), "a😀".width());
    }

    #[test]
    fn test_grapheme_range_ascii() {
        assert_eq!(grapheme_range("hello", 0), Some(0..1));
        assert_eq!(grapheme_range("hello", 4), Some(4..5));
        assert_eq!(grapheme_range("hello", 5), None);
    }

    #[test]
    fn test_grapheme_range_multibyte() {
        let s = "a中b";
        assert_eq!(grapheme_range(s, 1), Some(1..4));
        assert_eq!(grapheme_range(s, 2), Some(4..5));
    }

    #[test]
    fn test_grapheme_range_zwj_sequence() {
        let s = "👨‍👩‍👧"; // one grapheme cluster
        assert_eq!(grapheme_range(s, 0), Some(0..s.len()));
        assert_eq!(grapheme_range(s, 1), None);
    }

    #[test]
    fn test_grapheme_range_combining_mark() {
        let s = "e\u{0301}b";
        assert_eq!(grapheme_range(s, 0), Some(0..3));
        assert_eq!(grapheme_range(s, 1), Some(3..4));
    }

    #[test]
    fn test_grapheme_count() {
        assert_eq!(grapheme_count(""), 0);
        assert_eq!(grapheme_count("abc"), 3);
        assert_eq!(grapheme_count("e\u{0301}b"), 2);
    }
}
