// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary extraction: distinct words and how often they occur.

use crate::types::AutocompleteWord;
use crate::utils::is_word_char;
use std::collections::HashMap;

/// Words shorter than this never enter the vocabulary.
pub const MIN_WORD_LEN: usize = 2;

/// Split `text` into lowercase words and count them.
///
/// The text is lowercased, every char that is neither a word char (Unicode
/// alphanumeric or `_`) nor whitespace is dropped, and what remains is split
/// on whitespace. Punctuation is removed rather than treated as a separator,
/// so `"don't"` becomes `"dont"`.
///
/// The list is sorted by frequency, highest first. Words with equal frequency
/// keep the order in which they first appear in the document.
///
/// # Example
///
/// ```
/// use lector::{extract_words, AutocompleteWord};
///
/// let words = extract_words("cat cat dog");
/// assert_eq!(words, vec![AutocompleteWord::new("cat", 2), AutocompleteWord::new("dog", 1)]);
/// ```
pub fn extract_words(text: &str) -> Vec<AutocompleteWord> {
    if text.is_empty() {
        return Vec::new();
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    // Vec keeps first-seen order; the map points each word at its slot.
    let mut words: Vec<AutocompleteWord> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for token in cleaned.split_whitespace() {
        if token.chars().count() < MIN_WORD_LEN {
            continue;
        }
        match slots.get(token) {
            Some(&slot) => words[slot].frequency += 1,
            None => {
                slots.insert(token, words.len());
                words.push(AutocompleteWord::new(token, 1));
            }
        }
    }

    // Stable sort: ties stay in first-seen order.
    words.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    tracing::debug!(distinct = words.len(), "extracted vocabulary");
    words
}
