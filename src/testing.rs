//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{AutocompleteWord, SearchResult};

/// A short multi-line passage with repeated words, mixed case, punctuation
/// and a blank line.
pub const SAMPLE_TEXT: &str = "\
It was a bright cold day in April, and the clocks were striking thirteen.
Winston Smith, his chin nuzzled into his breast in an effort to escape the
vile wind, slipped quickly through the glass doors of Victory Mansions.

The hallway smelt of boiled cabbage and old rag mats. At one end of it a
coloured poster, too large for indoor display, had been tacked to the wall.";

/// Create a result with a span and no matched text.
///
/// Useful when feeding the highlighter spans that did not come from the
/// match finder.
pub fn make_span(index: usize, line_number: usize, start_pos: usize, end_pos: usize) -> SearchResult {
    SearchResult {
        index,
        text: String::new(),
        line_number,
        start_pos,
        end_pos,
    }
}

/// Create a complete result.
pub fn make_result(
    index: usize,
    text: &str,
    line_number: usize,
    start_pos: usize,
) -> SearchResult {
    SearchResult {
        index,
        text: text.to_string(),
        line_number,
        start_pos,
        end_pos: start_pos + text.chars().count(),
    }
}

/// Build a word list from `(word, frequency)` pairs, in the given order.
pub fn make_vocab(entries: &[(&str, usize)]) -> Vec<AutocompleteWord> {
    entries
        .iter()
        .map(|&(word, frequency)| AutocompleteWord::new(word, frequency))
        .collect()
}
