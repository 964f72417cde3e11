// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for matching and suggestions.
//!
//! Arbitrary documents and queries, including combining marks and chars whose
//! lowercase form is longer than themselves. Matching must never panic and
//! every result must point at real text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lector::{extract_words, find_all_matches, get_autocomplete_suggestions};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
    case_sensitive: bool,
    max_suggestions: u8,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts
    let text: String = input.text.chars().take(2000).collect();
    let query: String = input.query.chars().take(50).collect();

    let results = find_all_matches(&text, &query, input.case_sensitive);
    let chars: Vec<char> = text.chars().collect();
    let line_count = text.split('\n').count();

    if query.is_empty() {
        assert!(results.is_empty(), "empty query matched");
    }

    let mut previous_end = 0;
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.index, i, "indices not dense");
        assert!(result.start_pos >= previous_end, "overlapping results");
        assert!(result.end_pos <= chars.len(), "span past end of text");
        assert!(result.line_number < line_count, "line out of range");
        let slice: String = chars[result.start_pos..result.end_pos].iter().collect();
        assert_eq!(slice, result.text, "text does not match span");
        assert!(!slice.contains('\n'), "match crosses a line");
        previous_end = result.end_pos;
    }

    let words = extract_words(&text);
    for pair in words.windows(2) {
        assert!(pair[0].frequency >= pair[1].frequency, "vocabulary not sorted");
    }

    let max = input.max_suggestions as usize;
    let suggestions = get_autocomplete_suggestions(&query, &words, max);
    assert!(suggestions.len() <= max);
    let lower = query.to_lowercase();
    for s in &suggestions {
        assert!(s.starts_with(&lower) && s != &lower);
    }
});
