// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix suggestions over an extracted word list.

use crate::suggest::words::MIN_WORD_LEN;
use crate::types::AutocompleteWord;

/// How many suggestions the search bar shows by default.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Words from `word_list` that extend `input`, most frequent first.
///
/// Inputs shorter than two chars give nothing, since a single letter would
/// match most of the vocabulary. The comparison is against the lowercased
/// input, and a word equal to the input is never offered back.
///
/// `word_list` is expected in the order [`extract_words`](crate::extract_words)
/// produces; suggestions keep that order and stop at `max_suggestions`.
///
/// # Example
///
/// ```
/// use lector::{get_autocomplete_suggestions, AutocompleteWord};
///
/// let words = vec![AutocompleteWord::new("cat", 2), AutocompleteWord::new("car", 1)];
/// assert_eq!(get_autocomplete_suggestions("Ca", &words, 5), vec!["cat", "car"]);
/// ```
pub fn get_autocomplete_suggestions(
    input: &str,
    word_list: &[AutocompleteWord],
    max_suggestions: usize,
) -> Vec<String> {
    if input.chars().count() < MIN_WORD_LEN {
        return Vec::new();
    }

    let input_lower = input.to_lowercase();

    word_list
        .iter()
        .filter(|item| item.word.starts_with(&input_lower) && item.word != input_lower)
        .take(max_suggestions)
        .map(|item| item.word.clone())
        .collect()
}
