// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A reader's search state for one document.
//!
//! The utility functions are stateless; something still has to remember the
//! query, which result is focused, and whether case matters. `SearchSession`
//! is that something, owned by the caller and passed around like any value.
//! Every change recomputes derived data wholesale.
//!
//! ```text
//!  set_text ──▶ vocabulary
//!                   │
//!  search(query) ───┼──▶ suggestions
//!                   └──▶ results ──▶ active (first result)
//!
//!  next / prev / set_active ──▶ active
//!  toggle_case_sensitive ─────▶ results ──▶ active
//! ```

use crate::highlight::{highlight_text_with, render_html_with, render_lines_with, Markup};
use crate::options::SearchOptions;
use crate::search::navigate::{counter_label, next_index, prev_index};
use crate::search::find_all_matches;
use crate::suggest::{extract_words, get_autocomplete_suggestions};
use crate::types::{AutocompleteWord, LineRender, SearchResult};

/// Search state over a single document.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    text: String,
    vocabulary: Vec<AutocompleteWord>,
    query: String,
    results: Vec<SearchResult>,
    suggestions: Vec<String>,
    active: Option<usize>,
    options: SearchOptions,
    markup: Markup,
}

impl SearchSession {
    /// Start a session over `text` with default options.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_options(text, SearchOptions::default())
    }

    /// Start a session over `text` with the given options.
    pub fn with_options(text: impl Into<String>, options: SearchOptions) -> Self {
        let mut session = SearchSession {
            options,
            ..Default::default()
        };
        session.set_text(text);
        session
    }

    /// Use custom markup for the HTML accessors.
    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// Replace the document. The query and its results are cleared.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.vocabulary = extract_words(&self.text);
        self.query.clear();
        self.clear_results();
        tracing::debug!(
            chars = self.text.chars().count(),
            vocabulary = self.vocabulary.len(),
            "session text replaced"
        );
    }

    /// Run a search for `query`.
    ///
    /// A blank query clears results, suggestions and focus. Otherwise the
    /// suggestions and results are recomputed and the first result, if any,
    /// becomes active.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_string();

        if query.trim().is_empty() {
            self.clear_results();
            return;
        }

        self.suggestions =
            get_autocomplete_suggestions(query, &self.vocabulary, self.options.max_suggestions);
        self.rematch();
    }

    /// Search for a picked suggestion. Suggestions are closed afterwards.
    pub fn select_suggestion(&mut self, suggestion: &str) {
        self.query = suggestion.to_string();
        self.suggestions.clear();
        self.rematch();
    }

    /// Flip case sensitivity and rerun the current query.
    pub fn toggle_case_sensitive(&mut self) {
        self.set_case_sensitive(!self.options.case_sensitive);
    }

    /// Set case sensitivity and rerun the current query if it changed.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        if self.options.case_sensitive == case_sensitive {
            return;
        }
        self.options.case_sensitive = case_sensitive;
        if !self.query.is_empty() {
            self.rematch();
        }
    }

    /// Focus the next result, wrapping at the end.
    pub fn next_result(&mut self) -> Option<usize> {
        if !self.results.is_empty() {
            self.active = next_index(self.active, self.results.len());
        }
        self.active
    }

    /// Focus the previous result, wrapping at the start.
    pub fn prev_result(&mut self) -> Option<usize> {
        if !self.results.is_empty() {
            self.active = prev_index(self.active, self.results.len());
        }
        self.active
    }

    /// Focus a result directly, e.g. after a click on its highlight.
    ///
    /// Returns false and leaves focus alone if `index` is out of range.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index < self.results.len() {
            self.active = Some(index);
            true
        } else {
            false
        }
    }

    /// Drop focus without clearing results.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn vocabulary(&self) -> &[AutocompleteWord] {
        &self.vocabulary
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn case_sensitive(&self) -> bool {
        self.options.case_sensitive
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The focused result.
    pub fn active_result(&self) -> Option<&SearchResult> {
        self.active.and_then(|i| self.results.get(i))
    }

    /// `"N of M"` for the result counter, `None` without results.
    pub fn counter(&self) -> Option<String> {
        counter_label(self.active, self.results.len())
    }

    /// The document with every match wrapped.
    pub fn highlight_html(&self) -> String {
        highlight_text_with(&self.text, &self.results, self.active, &self.markup)
    }

    /// The document as line elements with matches wrapped.
    pub fn render_lines(&self) -> Vec<LineRender> {
        render_lines_with(&self.text, &self.results, self.active, &self.markup)
    }

    /// [`render_lines`](Self::render_lines) joined into one string.
    pub fn render_html(&self) -> String {
        render_html_with(&self.text, &self.results, self.active, &self.markup)
    }

    fn rematch(&mut self) {
        self.results = find_all_matches(&self.text, &self.query, self.options.case_sensitive);
        self.active = if self.results.is_empty() { None } else { Some(0) };
        tracing::debug!(
            query = %self.query,
            case_sensitive = self.options.case_sensitive,
            results = self.results.len(),
            "session search"
        );
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.suggestions.clear();
        self.active = None;
    }
}
