//! A session driven keystroke by keystroke.

use super::common::SAMPLE_TEXT;
use lector::{Markup, SearchOptions, SearchSession};

#[test]
fn test_typing_a_query() {
    let mut session = SearchSession::new(SAMPLE_TEXT);

    // One keystroke: no suggestions yet, but matches for "w".
    session.search("w");
    assert!(session.suggestions().is_empty());
    assert!(!session.results().is_empty());

    // Two keystrokes: suggestions appear.
    session.search("wi");
    assert!(session.suggestions().iter().any(|s| s == "winston"));
    assert!(session.suggestions().iter().all(|s| s.starts_with("wi")));

    // Pick a suggestion.
    session.select_suggestion("winston");
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.counter().as_deref(), Some("1 of 1"));
    assert_eq!(session.results()[0].text, "Winston");
}

#[test]
fn test_navigation_cycle() {
    let mut session = SearchSession::new(SAMPLE_TEXT);
    session.search("the");
    let count = session.results().len();
    assert!(count > 2);

    for expected in 1..count {
        assert_eq!(session.next_result(), Some(expected));
    }
    assert_eq!(session.next_result(), Some(0));
    assert_eq!(session.prev_result(), Some(count - 1));
    assert_eq!(
        session.counter(),
        Some(format!("{} of {}", count, count))
    );
}

#[test]
fn test_clicked_highlight_becomes_active() {
    let mut session = SearchSession::new(SAMPLE_TEXT);
    session.search("in");
    assert!(session.set_active(2));
    let html = session.render_html();
    assert!(html.contains("class=\"highlight active\" id=\"result-2\""));
    assert_eq!(html.matches("line-highlight").count(), 1);
}

#[test]
fn test_case_toggle_keeps_query() {
    let options = SearchOptions {
        case_sensitive: true,
        ..SearchOptions::default()
    };
    let mut session = SearchSession::with_options(SAMPLE_TEXT, options);
    session.search("The");
    assert_eq!(session.results().len(), 1);

    session.toggle_case_sensitive();
    assert!(!session.case_sensitive());
    assert_eq!(session.query(), "The");
    assert_eq!(session.results().len(), 5);
    assert_eq!(session.active_index(), Some(0));
}

#[test]
fn test_new_text_replaces_vocabulary() {
    let mut session = SearchSession::new(SAMPLE_TEXT);
    session.search("clock");
    session.set_text("<p>fresh text, fresh start</p>");
    assert!(session.results().is_empty());
    assert_eq!(session.vocabulary()[0].word, "fresh");
    assert_eq!(session.vocabulary()[0].frequency, 2);
}

#[test]
fn test_escaped_session_markup() {
    let mut session =
        SearchSession::new("<p>fresh</p>").with_markup(Markup::escaped());
    session.search("fresh");
    assert_eq!(
        session.highlight_html(),
        "&lt;p&gt;<span class=\"highlight active\" data-result-index=\"0\">fresh</span>&lt;/p&gt;"
    );
}
