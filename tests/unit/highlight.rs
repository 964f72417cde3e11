//! Highlight markup produced from match finder output.

use super::common::{make_result, make_span, SAMPLE_TEXT};
use lector::{
    find_all_matches, highlight_text, highlight_text_with, render_html, render_lines, Markup,
};

#[test]
fn test_highlight_reference_markup() {
    let text = "The cat sat\non the mat";
    let results = find_all_matches(text, "at", false);
    assert_eq!(
        highlight_text(text, &results, Some(2)),
        "The c<span class=\"highlight\" data-result-index=\"0\">at</span> \
         s<span class=\"highlight\" data-result-index=\"1\">at</span>\n\
         on the m<span class=\"highlight active\" data-result-index=\"2\">at</span>"
    );
}

#[test]
fn test_active_marked_once() {
    let results = find_all_matches(SAMPLE_TEXT, "the", false);
    let html = highlight_text(SAMPLE_TEXT, &results, Some(3));
    assert_eq!(html.matches("highlight active").count(), 1);
    assert_eq!(html.matches("<span").count(), results.len());
}

#[test]
fn test_no_active_when_out_of_range() {
    let results = find_all_matches(SAMPLE_TEXT, "the", false);
    let html = highlight_text(SAMPLE_TEXT, &results, Some(results.len() + 5));
    assert!(!html.contains("active"));
}

#[test]
fn test_render_lines_cover_every_line() {
    let results = find_all_matches(SAMPLE_TEXT, "wind", false);
    let lines = render_lines(SAMPLE_TEXT, &results, Some(0));

    assert_eq!(lines.len(), SAMPLE_TEXT.split('\n').count());
    assert_eq!(
        lines.iter().map(|l| l.line).collect::<Vec<_>>(),
        (1..=lines.len()).collect::<Vec<_>>()
    );
    // The blank line keeps a placeholder.
    assert_eq!(lines[3].html, "<div class=\"line\" data-line=\"4\"> </div>");
    // "wind" only occurs on line index 2 ("vile wind").
    let active: Vec<usize> = lines.iter().filter(|l| l.has_active).map(|l| l.line).collect();
    assert_eq!(active, vec![3]);
    assert!(lines[2].html.contains("id=\"result-0\""));
}

#[test]
fn test_render_html_plain_without_results() {
    assert_eq!(render_html(SAMPLE_TEXT, &[], None), SAMPLE_TEXT);
}

#[test]
fn test_hand_built_spans() {
    let text = "alpha beta gamma";
    let results = vec![make_result(1, "gamma", 0, 11), make_span(0, 0, 0, 5)];
    assert_eq!(
        highlight_text(text, &results, Some(1)),
        "<span class=\"highlight\" data-result-index=\"0\">alpha</span> beta \
         <span class=\"highlight active\" data-result-index=\"1\">gamma</span>"
    );
}

#[test]
fn test_custom_markup() {
    let text = "a < b and b > a";
    let results = find_all_matches(text, "b", false);
    let markup = Markup::escaped().tag("mark").class("hit").active_class("now");
    assert_eq!(
        highlight_text_with(text, &results, Some(0), &markup),
        "a &lt; <mark class=\"hit now\" data-result-index=\"0\">b</mark> and \
         <mark class=\"hit\" data-result-index=\"1\">b</mark> &gt; a"
    );
}
