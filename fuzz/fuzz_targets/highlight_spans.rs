// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the highlighter with hostile spans.
//!
//! Results here do not come from the matcher: they may overlap, arrive out
//! of order, or point past the end of the text. The renderers must skip or
//! clamp them without panicking on a char boundary.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lector::testing::make_span;
use lector::{highlight_text_with, render_lines_with, Markup};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    spans: Vec<(u16, u16)>,
    active: Option<u8>,
    escape: bool,
}

fuzz_target!(|input: Input| {
    let text: String = input.text.chars().take(1000).collect();
    let results: Vec<_> = input
        .spans
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, &(start, len))| {
            let start = start as usize;
            make_span(i, 0, start, start + (len % 32) as usize)
        })
        .collect();
    let active = input.active.map(usize::from);
    let markup = Markup::default().escape(input.escape);

    let html = highlight_text_with(&text, &results, active, &markup);
    if input.escape {
        assert_eq!(
            html.matches("<span").count(),
            html.matches("</span>").count(),
            "unbalanced spans"
        );
    }

    let lines = render_lines_with(&text, &results, active, &markup);
    assert_eq!(lines.len(), text.split('\n').count());
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.line, i + 1);
    }
});
