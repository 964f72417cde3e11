// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Lowercase a single char without changing the char count.
///
/// `char::to_lowercase` can expand (`'İ'` becomes `"i̇"`, two chars). Expanding
/// would shift every later position in the folded line away from the original
/// line, so chars with a multi-char lowercase form are left as they are.
///
/// Final sigma `'ς'` folds to `'σ'`. `str::to_lowercase` picks between the
/// two by position in the word, so a word extracted from `"ΣΟΦΟΣ"` ends in
/// `'ς'` while a per-char fold of the same text ends in `'σ'`.
#[inline]
pub fn fold_char(c: char) -> char {
    if c == 'ς' {
        return 'σ';
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Case-fold a string char by char. The result has exactly as many chars as
/// the input, so a position found in the folded text is valid in the original.
pub fn fold_chars(value: &str) -> Vec<char> {
    value.chars().map(fold_char).collect()
}

/// Find `needle` in `haystack` starting at char position `from`.
///
/// Returns the char position of the first occurrence at or after `from`.
pub fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|p| p + from)
}

/// Byte offset of every char boundary in `text`, plus one trailing entry for
/// `text.len()`. Entry `i` is the byte offset of char `i`.
pub fn char_byte_offsets(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// A word character: Unicode alphanumeric or underscore.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Append `text` to `out` with HTML special characters escaped.
pub fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
