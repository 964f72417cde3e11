// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Span walking and the two renderers built on it.

use super::Markup;
use crate::types::{LineRender, SearchResult};
use crate::utils::char_byte_offsets;
use std::collections::HashMap;

/// Per-line flags collected from a result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineInfo {
    has_highlight: bool,
    has_active: bool,
}

/// Wrap every match in `text`, the focused one marked `active`.
///
/// Produces `<span class="highlight" data-result-index="N">…</span>` around
/// each match. With no results the text comes back as it went in.
///
/// # Example
///
/// ```
/// use lector::{find_all_matches, highlight_text};
///
/// let text = "cat and cat";
/// let results = find_all_matches(text, "cat", false);
/// assert_eq!(
///     highlight_text(text, &results, Some(1)),
///     "<span class=\"highlight\" data-result-index=\"0\">cat</span> and \
///      <span class=\"highlight active\" data-result-index=\"1\">cat</span>"
/// );
/// ```
pub fn highlight_text(text: &str, results: &[SearchResult], active_index: Option<usize>) -> String {
    highlight_text_with(text, results, active_index, &Markup::default())
}

/// [`highlight_text`] with custom markup.
pub fn highlight_text_with(
    text: &str,
    results: &[SearchResult],
    active_index: Option<usize>,
    markup: &Markup,
) -> String {
    wrap_matches(text, results, active_index, markup, false).html
}

/// Render `text` as one element per line, with matches wrapped.
///
/// Each line becomes `<div class="line" data-line="K">…</div>` with `K`
/// counting from 1. The line holding the active match also gets
/// `line-highlight`. Matches carry an `id="result-N"` anchor in addition to
/// the attributes [`highlight_text`] writes. Empty lines render as a single
/// space so they keep their height.
pub fn render_lines(
    text: &str,
    results: &[SearchResult],
    active_index: Option<usize>,
) -> Vec<LineRender> {
    render_lines_with(text, results, active_index, &Markup::default())
}

/// [`render_lines`] with custom markup.
pub fn render_lines_with(
    text: &str,
    results: &[SearchResult],
    active_index: Option<usize>,
    markup: &Markup,
) -> Vec<LineRender> {
    let wrapped = wrap_matches(text, results, active_index, markup, true);

    wrapped
        .html
        .split('\n')
        .enumerate()
        .map(|(line_number, content)| {
            let info = wrapped.lines.get(&line_number).copied().unwrap_or_default();
            LineRender {
                line: line_number + 1,
                has_highlight: info.has_highlight,
                has_active: info.has_active,
                html: markup.line(line_number + 1, info.has_active, content),
            }
        })
        .collect()
}

/// The line elements of [`render_lines`] joined into one HTML string.
///
/// With no results there is nothing to mark, and the text is returned
/// without line elements, exactly as the page shows plain text.
pub fn render_html(text: &str, results: &[SearchResult], active_index: Option<usize>) -> String {
    render_html_with(text, results, active_index, &Markup::default())
}

/// [`render_html`] with custom markup.
pub fn render_html_with(
    text: &str,
    results: &[SearchResult],
    active_index: Option<usize>,
    markup: &Markup,
) -> String {
    if text.is_empty() || results.is_empty() {
        let mut out = String::with_capacity(text.len());
        markup.push_text(&mut out, text);
        return out;
    }
    render_lines_with(text, results, active_index, markup)
        .into_iter()
        .map(|line| line.html)
        .collect()
}

/// Output of the span walk: the HTML, and flags for every line that got
/// at least one wrapped match.
struct Wrapped {
    html: String,
    lines: HashMap<usize, LineInfo>,
}

/// The shared walker: copy text between matches, wrap the matches.
///
/// Results are visited in `start_pos` order whatever order they arrive in.
/// A result starting inside an already wrapped match, or at or beyond the
/// end of the text, is dropped. An `end_pos` past the end is clamped.
///
/// Line flags are keyed by the line a wrapped match starts on, counted from
/// the text itself, so dropped results never mark a line.
fn wrap_matches(
    text: &str,
    results: &[SearchResult],
    active_index: Option<usize>,
    markup: &Markup,
    with_ids: bool,
) -> Wrapped {
    let mut out = String::with_capacity(text.len() + results.len() * 64);
    let mut lines: HashMap<usize, LineInfo> = HashMap::new();
    if text.is_empty() || results.is_empty() {
        markup.push_text(&mut out, text);
        return Wrapped { html: out, lines };
    }

    let offsets = char_byte_offsets(text);
    let char_len = offsets.len() - 1;

    let mut ordered: Vec<&SearchResult> = results.iter().collect();
    ordered.sort_by_key(|r| r.start_pos);

    let mut cursor = 0usize;
    let mut line = 0usize;
    for result in ordered {
        let start = result.start_pos;
        let end = result.end_pos.min(char_len);
        if start < cursor || start >= char_len || end <= start {
            tracing::trace!(
                index = result.index,
                start = result.start_pos,
                end = result.end_pos,
                "skipping span outside document or overlapping previous match"
            );
            continue;
        }

        let before = &text[offsets[cursor]..offsets[start]];
        let matched = &text[offsets[start]..offsets[end]];
        let active = active_index == Some(result.index);
        line += before.matches('\n').count();

        let info = lines.entry(line).or_default();
        info.has_highlight = true;
        info.has_active |= active;

        markup.push_text(&mut out, before);
        markup.push_open(&mut out, result.index, active, with_ids);
        markup.push_text(&mut out, matched);
        markup.push_close(&mut out);
        line += matched.matches('\n').count();
        cursor = end;
    }
    markup.push_text(&mut out, &text[offsets[cursor]..]);

    Wrapped { html: out, lines }
}
