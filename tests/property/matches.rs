//! Match finder invariants.

use super::common::{assert_results_well_formed, line_of};
use lector::find_all_matches;
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Documents over a tiny alphabet so that random terms actually occur.
fn document_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB \n]{0,60}").unwrap()
}

fn term_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abAB]{1,4}").unwrap()
}

/// Words with multi-byte and case-changing characters.
fn unicode_document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "café", "CAFÉ", "naïve", "İstanbul", "straße", "ΣΟΦΙΑ", "σοφία", "hello", "\n",
        ]),
        0..12,
    )
    .prop_map(|words| words.join(" "))
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: every result set is sequential, sorted and non-overlapping.
    #[test]
    fn prop_results_well_formed(doc in document_strategy(), term in term_strategy(), cs: bool) {
        let results = find_all_matches(&doc, &term, cs);
        assert_results_well_formed(&doc, &results);
        for r in &results {
            prop_assert_eq!(r.line_number, line_of(&doc, r.start_pos));
        }
    }

    /// Property: a term that literally occurs is found.
    #[test]
    fn prop_literal_occurrence_found(
        prefix in document_strategy(),
        term in term_strategy(),
        suffix in document_strategy(),
        cs: bool,
    ) {
        let doc = format!("{}{}{}", prefix, term, suffix);
        let results = find_all_matches(&doc, &term, cs);
        prop_assert!(!results.is_empty());
        if cs {
            prop_assert!(results.iter().any(|r| r.text == term));
        } else {
            let lower = term.to_lowercase();
            prop_assert!(results.iter().all(|r| r.text.to_lowercase() == lower));
        }
    }

    /// Property: calling twice gives identical output.
    #[test]
    fn prop_deterministic(doc in document_strategy(), term in term_strategy(), cs: bool) {
        prop_assert_eq!(find_all_matches(&doc, &term, cs), find_all_matches(&doc, &term, cs));
    }

    /// Property: case-insensitive matches are a superset of case-sensitive ones.
    #[test]
    fn prop_insensitive_superset(doc in document_strategy(), term in term_strategy()) {
        let sensitive = find_all_matches(&doc, &term, true);
        let insensitive = find_all_matches(&doc, &term, false);
        prop_assert!(insensitive.len() >= sensitive.len());
    }

    /// Property: Unicode text never yields spans that slice off char boundaries.
    #[test]
    fn prop_unicode_spans_valid(doc in unicode_document_strategy(), term in "[a-zé]{1,3}", cs: bool) {
        let results = find_all_matches(&doc, &term, cs);
        assert_results_well_formed(&doc, &results);
    }
}
