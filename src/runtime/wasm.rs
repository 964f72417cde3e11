// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for lector.
//!
//! This is the browser-facing API. Two ways in: free functions that mirror the
//! native ones for pages that keep their own state, or a `LectorSession` that
//! holds the document, query and focus so the page only forwards events.
//!
//! # Session API
//!
//! ```js
//! const session = new LectorSession(text, { caseSensitive: false });
//! session.search(input.value);
//! counter.textContent = session.counter ?? "";
//! view.innerHTML = session.renderHtml();
//! nextButton.onclick = () => { session.next(); view.innerHTML = session.renderHtml(); };
//! ```

use crate::highlight::Markup;
use crate::options::SearchOptions;
use crate::session::SearchSession;
use crate::types::{AutocompleteWord, SearchResult};
use serde::{Deserialize, Serialize};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Session options for JavaScript consumption.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct JsSessionOptions {
    case_sensitive: bool,
    max_suggestions: usize,
    /// HTML-escape document text in rendered output (default: false).
    escape: bool,
}

impl Default for JsSessionOptions {
    fn default() -> Self {
        let defaults = SearchOptions::default();
        Self {
            case_sensitive: defaults.case_sensitive,
            max_suggestions: defaults.max_suggestions,
            escape: false,
        }
    }
}

impl From<JsSessionOptions> for SearchOptions {
    fn from(js: JsSessionOptions) -> Self {
        SearchOptions {
            case_sensitive: js.case_sensitive,
            max_suggestions: js.max_suggestions,
            limit: None,
        }
    }
}

fn parse_results(results: JsValue) -> Result<Vec<SearchResult>, JsValue> {
    from_value(results).map_err(|e| JsValue::from_str(&format!("Invalid results: {}", e)))
}

/// Every occurrence of `search_term` in `text`.
#[wasm_bindgen(js_name = "findAllMatches")]
pub fn find_all_matches(
    text: &str,
    search_term: &str,
    case_sensitive: Option<bool>,
) -> Result<JsValue, JsValue> {
    to_js(&crate::find_all_matches(
        text,
        search_term,
        case_sensitive.unwrap_or(false),
    ))
}

/// Frequency-sorted vocabulary of `text`.
#[wasm_bindgen(js_name = "extractWords")]
pub fn extract_words(text: &str) -> Result<JsValue, JsValue> {
    to_js(&crate::extract_words(text))
}

/// Suggestions for `input` from a word list produced by `extractWords`.
#[wasm_bindgen(js_name = "getAutocompleteSuggestions")]
pub fn get_autocomplete_suggestions(
    input: &str,
    word_list: JsValue,
    max_suggestions: Option<usize>,
) -> Result<JsValue, JsValue> {
    let words: Vec<AutocompleteWord> = from_value(word_list)
        .map_err(|e| JsValue::from_str(&format!("Invalid word list: {}", e)))?;
    to_js(&crate::get_autocomplete_suggestions(
        input,
        &words,
        max_suggestions.unwrap_or(crate::DEFAULT_MAX_SUGGESTIONS),
    ))
}

/// `text` with every result wrapped in a highlight span.
#[wasm_bindgen(js_name = "highlightText")]
pub fn highlight_text(
    text: &str,
    results: JsValue,
    active_index: Option<usize>,
) -> Result<String, JsValue> {
    let results = parse_results(results)?;
    Ok(crate::highlight_text(text, &results, active_index))
}

/// `text` as per-line elements: `[{ line, hasHighlight, hasActive, html }]`.
#[wasm_bindgen(js_name = "renderLines")]
pub fn render_lines(
    text: &str,
    results: JsValue,
    active_index: Option<usize>,
) -> Result<JsValue, JsValue> {
    let results = parse_results(results)?;
    to_js(&crate::render_lines(text, &results, active_index))
}

/// WASM session - thin wrapper around SearchSession.
#[wasm_bindgen]
pub struct LectorSession {
    session: SearchSession,
}

#[wasm_bindgen]
impl LectorSession {
    /// Start a session over `text`.
    ///
    /// `options` is `{ caseSensitive, maxSuggestions, escape }`, all optional.
    /// `escape` HTML-escapes document text in rendered output.
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, options: JsValue) -> Result<LectorSession, JsValue> {
        let opts: JsSessionOptions = if options.is_undefined() || options.is_null() {
            JsSessionOptions::default()
        } else {
            from_value(options).map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };
        let markup = Markup::default().escape(opts.escape);
        let options: SearchOptions = opts.into();
        options
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let session = SearchSession::with_options(text, options).with_markup(markup);
        Ok(LectorSession { session })
    }

    /// Replace the document.
    #[wasm_bindgen(js_name = "setText")]
    pub fn set_text(&mut self, text: &str) {
        self.session.set_text(text);
    }

    /// Run a search; returns the number of results.
    #[wasm_bindgen]
    pub fn search(&mut self, query: &str) -> usize {
        self.session.search(query);
        self.session.results().len()
    }

    /// Search for a picked suggestion; returns the number of results.
    #[wasm_bindgen(js_name = "selectSuggestion")]
    pub fn select_suggestion(&mut self, suggestion: &str) -> usize {
        self.session.select_suggestion(suggestion);
        self.session.results().len()
    }

    /// Flip case sensitivity; returns the new setting.
    #[wasm_bindgen(js_name = "toggleCaseSensitive")]
    pub fn toggle_case_sensitive(&mut self) -> bool {
        self.session.toggle_case_sensitive();
        self.session.case_sensitive()
    }

    /// Focus the next result; returns the new active index.
    #[wasm_bindgen]
    pub fn next(&mut self) -> Option<usize> {
        self.session.next_result()
    }

    /// Focus the previous result; returns the new active index.
    #[wasm_bindgen]
    pub fn prev(&mut self) -> Option<usize> {
        self.session.prev_result()
    }

    /// Focus a clicked highlight by its `data-result-index`.
    #[wasm_bindgen(js_name = "setActive")]
    pub fn set_active(&mut self, index: usize) -> bool {
        self.session.set_active(index)
    }

    #[wasm_bindgen(getter, js_name = "activeIndex")]
    pub fn active_index(&self) -> Option<usize> {
        self.session.active_index()
    }

    #[wasm_bindgen(getter, js_name = "caseSensitive")]
    pub fn case_sensitive(&self) -> bool {
        self.session.case_sensitive()
    }

    #[wasm_bindgen(getter, js_name = "resultCount")]
    pub fn result_count(&self) -> usize {
        self.session.results().len()
    }

    /// `"N of M"`, or undefined without results.
    #[wasm_bindgen(getter)]
    pub fn counter(&self) -> Option<String> {
        self.session.counter()
    }

    #[wasm_bindgen]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.results())
    }

    #[wasm_bindgen]
    pub fn suggestions(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.suggestions())
    }

    #[wasm_bindgen]
    pub fn vocabulary(&self) -> Result<JsValue, JsValue> {
        to_js(self.session.vocabulary())
    }

    #[wasm_bindgen(js_name = "highlightHtml")]
    pub fn highlight_html(&self) -> String {
        self.session.highlight_html()
    }

    #[wasm_bindgen(js_name = "renderHtml")]
    pub fn render_html(&self) -> String {
        self.session.render_html()
    }

    #[wasm_bindgen(js_name = "renderLines")]
    pub fn render_lines(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.render_lines())
    }
}
