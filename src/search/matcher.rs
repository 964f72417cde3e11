// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal substring matching over a document, line by line.
//!
//! # Offsets
//!
//! Every line is scanned on its own. A running offset tracks where the line
//! starts in the document and grows by `line_len + 1` after each line, the
//! `+1` standing in for the `\n` that `split` removed. After the last line
//! the running offset is one past the end of the document when the document
//! has no trailing newline. No result ever reads it at that point, so every
//! reported span lies inside the document.
//!
//! # Case folding
//!
//! Case-insensitive mode compares a folded copy of each line against a folded
//! copy of the term, then slices the match out of the original line. Folding
//! is char-for-char (see [`fold_chars`]), so the folded and original lines
//! have the same length and positions carry over unchanged.

use crate::types::SearchResult;
use crate::utils::{find_from, fold_chars};

/// Find every non-overlapping occurrence of `search_term` in `text`.
///
/// Results come back in scan order: line by line, left to right within a
/// line. That is also ascending `start_pos` order. After a match at `p` the
/// scan resumes at `p + term_len`, so `"aa"` in `"aaa"` matches once.
///
/// Empty `text` or empty `search_term` gives an empty list.
///
/// # Example
///
/// ```
/// use lector::find_all_matches;
///
/// let results = find_all_matches("The cat sat\non the mat", "at", false);
/// let spans: Vec<_> = results.iter().map(|r| (r.start_pos, r.end_pos)).collect();
/// assert_eq!(spans, vec![(5, 7), (9, 11), (21, 23)]);
/// assert_eq!(results[2].line_number, 1);
/// ```
pub fn find_all_matches(text: &str, search_term: &str, case_sensitive: bool) -> Vec<SearchResult> {
    if text.is_empty() || search_term.is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = if case_sensitive {
        search_term.chars().collect()
    } else {
        fold_chars(search_term)
    };
    let term_len = needle.len();

    let mut results = Vec::new();
    let mut char_index = 0usize;

    for (line_number, line) in text.split('\n').enumerate() {
        let original: Vec<char> = line.chars().collect();
        let haystack = if case_sensitive {
            original.clone()
        } else {
            fold_chars(line)
        };

        let mut position = 0usize;
        while let Some(found) = find_from(&haystack, &needle, position) {
            results.push(SearchResult {
                index: results.len(),
                text: original[found..found + term_len].iter().collect(),
                line_number,
                start_pos: char_index + found,
                end_pos: char_index + found + term_len,
            });
            position = found + term_len;
        }

        char_index += original.len() + 1;
    }

    tracing::trace!(
        term = search_term,
        case_sensitive,
        matches = results.len(),
        "scanned document"
    );

    results
}
