// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag and class names used when wrapping matches and lines.

use crate::utils::push_escaped;

/// Configuration for highlight markup.
///
/// The default produces the classes the reader page styles against:
/// `<span class="highlight">` for matches, `active` added to the focused one,
/// and `<div class="line">` per line with `line-highlight` on the active line.
/// Document text is copied unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    /// Element wrapping each match.
    pub tag: String,
    /// Class on every match element.
    pub class: String,
    /// Extra class on the active match element.
    pub active_class: String,
    /// Element wrapping each rendered line.
    pub line_tag: String,
    /// Class on every line element.
    pub line_class: String,
    /// Extra class on the line holding the active match.
    pub active_line_class: String,
    /// Content of an empty line, so it still takes up a row.
    pub blank_line: String,
    /// Escape HTML special characters in document text.
    pub escape: bool,
}

impl Default for Markup {
    fn default() -> Self {
        Markup {
            tag: "span".to_string(),
            class: "highlight".to_string(),
            active_class: "active".to_string(),
            line_tag: "div".to_string(),
            line_class: "line".to_string(),
            active_line_class: "line-highlight".to_string(),
            blank_line: " ".to_string(),
            escape: false,
        }
    }
}

impl Markup {
    /// Default markup with document text HTML-escaped.
    pub fn escaped() -> Self {
        Self::default().escape(true)
    }

    /// Set the element used for matches.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the class for match elements.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Set the extra class for the active match.
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Set whether document text is escaped.
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Append document text, escaping it if configured.
    pub(crate) fn push_text(&self, out: &mut String, text: &str) {
        if self.escape {
            push_escaped(out, text);
        } else {
            out.push_str(text);
        }
    }

    /// Opening tag for a match. `with_id` adds the `result-N` anchor the page
    /// scrolls to.
    pub(crate) fn push_open(&self, out: &mut String, index: usize, active: bool, with_id: bool) {
        out.push('<');
        out.push_str(&self.tag);
        out.push_str(" class=\"");
        out.push_str(&self.class);
        if active {
            out.push(' ');
            out.push_str(&self.active_class);
        }
        out.push('"');
        if with_id {
            out.push_str(&format!(" id=\"result-{}\"", index));
        }
        out.push_str(&format!(" data-result-index=\"{}\">", index));
    }

    pub(crate) fn push_close(&self, out: &mut String) {
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// A complete line element around already-rendered `content`.
    pub(crate) fn line(&self, number: usize, active: bool, content: &str) -> String {
        let content = if content.is_empty() {
            self.blank_line.as_str()
        } else {
            content
        };
        let class = if active {
            format!("{} {}", self.line_class, self.active_line_class)
        } else {
            self.line_class.clone()
        };
        format!(
            "<{tag} class=\"{class}\" data-line=\"{number}\">{content}</{tag}>",
            tag = self.line_tag,
        )
    }
}
