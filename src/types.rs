// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow between the document, the search utility, and the page.
//!
//! Everything here is derived data: results and vocabulary are rebuilt from
//! scratch on every query or text change, never patched in place. Field names
//! serialize in camelCase because the browser is the main consumer and it
//! already speaks `lineNumber` / `startPos`.
//!
//! # Invariants
//!
//! - **SearchResult**: `start_pos <= end_pos`, and `end_pos - start_pos` equals
//!   the char length of `text`. Within one result set, `index` is the position
//!   of the result in the list and `start_pos` is strictly increasing.
//!
//! - **AutocompleteWord**: `word.chars().count() >= 2` and `frequency >= 1`.
//!   A word list holds each word once, sorted by `frequency` descending.
//!
//! All offsets are counted in chars (Unicode scalar values), not bytes.

use serde::{Deserialize, Serialize};

/// One located occurrence of the search term in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Rank among all matches for the current query, in scan order.
    pub index: usize,
    /// The matched substring, in the document's original case.
    pub text: String,
    /// 0-based line containing the match (lines split on `\n`).
    pub line_number: usize,
    /// Char offset of the first matched char in the whole document.
    pub start_pos: usize,
    /// Char offset one past the last matched char (exclusive).
    pub end_pos: usize,
}

impl SearchResult {
    /// Length of the match in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.end_pos - self.start_pos
    }

    /// True for a zero-width span. The match finder never produces one.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start_pos == self.end_pos
    }

    /// Whether `pos` falls inside this match.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        self.start_pos <= pos && pos < self.end_pos
    }
}

/// A distinct word from the document, with how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AutocompleteWord {
    pub word: String,
    pub frequency: usize,
}

impl AutocompleteWord {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// One rendered display line, as produced by the line renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineRender {
    /// 1-based display line number (the `data-line` attribute).
    pub line: usize,
    /// The line contains at least one match.
    pub has_highlight: bool,
    /// The line contains the active match.
    pub has_active: bool,
    /// The complete `<div>` element for this line.
    pub html: String,
}
