//! In-page search for a single document: find, suggest, highlight.
//!
//! A reader pastes or loads some text, then types a query. On every keystroke
//! the page asks this crate three things: where does the query occur, which
//! words from the text could it be completing, and what does the text look
//! like with the matches marked. All three are plain synchronous functions
//! over strings, with no index to build and nothing to keep in sync.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  search/    │────▶│  highlight/  │     │  suggest/    │
//! │ (matches,   │     │ (spans, line │     │ (vocabulary, │
//! │ navigation) │     │  elements)   │     │  prefixes)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    session.rs                        │
//! │  (query, focus, case sensitivity for one document)   │
//! └─────────────────────────────────────────────────────┘
//!        │                                       │
//!        ▼                                       ▼
//!  runtime/wasm.rs (browser)              main.rs (terminal)
//! ```
//!
//! # Usage
//!
//! ```
//! use lector::{extract_words, find_all_matches, get_autocomplete_suggestions, highlight_text};
//!
//! let text = "The cat sat\non the mat";
//! let results = find_all_matches(text, "at", false);
//! assert_eq!(results.len(), 3);
//!
//! let words = extract_words(text);
//! assert_eq!(get_autocomplete_suggestions("ma", &words, 5), vec!["mat"]);
//!
//! let html = highlight_text(text, &results, Some(0));
//! assert!(html.starts_with("The c<span class=\"highlight active\""));
//! ```

pub mod document;
pub mod error;
pub mod highlight;
pub mod options;
pub mod search;
pub mod session;
pub mod suggest;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod runtime;

// Re-exports for public API
pub use document::load_document;
pub use error::{Error, Result};
pub use highlight::{
    highlight_text, highlight_text_with, render_html, render_html_with, render_lines,
    render_lines_with, Markup,
};
pub use options::SearchOptions;
pub use search::find_all_matches;
pub use search::navigate::{counter_label, next_index, prev_index};
pub use session::SearchSession;
pub use suggest::{extract_words, get_autocomplete_suggestions, DEFAULT_MAX_SUGGESTIONS};
pub use types::{AutocompleteWord, LineRender, SearchResult};
