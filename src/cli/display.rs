// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the lector CLI.
//!
//! Callers name what a piece of text *is* ([`Style::Query`], [`Style::Match`],
//! ...) and this module decides how it looks. Two palettes, OneDark and One
//! Light, picked from `LECTOR_THEME` or `COLORFGBG`. With `NO_COLOR` set or
//! stdout not a TTY nothing is colored, so piped output stays greppable.

use std::sync::OnceLock;

/// Inner width of a panel, between the two `│` borders.
pub const PANEL_WIDTH: usize = 80;

/// Chars of context kept on each side of a match in a result row.
pub const CONTEXT_CHARS: usize = 24;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const REVERSE: &str = "\x1b[7m";

type Rgb = (u8, u8, u8);

/// Colors by role rather than by hue.
struct Palette {
    heading: Rgb,
    query: Rgb,
    count: Rgb,
    index: Rgb,
    muted: Rgb,
    hit: Rgb,
    focus: Rgb,
}

const ONEDARK: Palette = Palette {
    heading: (86, 182, 194), // #56b6c2
    query: (86, 182, 194),
    count: (152, 195, 121), // #98c379
    index: (97, 175, 239),  // #61afef
    muted: (92, 99, 112),   // #5c6370
    hit: (229, 192, 123),   // #e5c07b
    focus: (255, 215, 0),
};

const ONELIGHT: Palette = Palette {
    heading: (1, 132, 188), // #0184bc
    query: (1, 132, 188),
    count: (80, 161, 79),  // #50a14f
    index: (64, 120, 242), // #4078f2
    muted: (160, 161, 167), // #a0a1a7
    hit: (193, 132, 1),    // #c18401
    focus: (152, 104, 1),
};

/// What a piece of output is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Heading,
    Query,
    Count,
    Index,
    Word,
    Muted,
    /// A match in a context line.
    Match,
    /// The focused match.
    ActiveMatch,
    Bar,
}

impl Style {
    fn escape(self, palette: &Palette) -> String {
        let (bold, color) = match self {
            Style::Heading => (true, palette.heading),
            Style::Query => (true, palette.query),
            Style::Count => (true, palette.count),
            Style::Index => (false, palette.index),
            Style::Word => (false, palette.query),
            Style::Muted => (false, palette.muted),
            Style::Match => (true, palette.hit),
            Style::ActiveMatch => (true, palette.focus),
            Style::Bar => (false, palette.count),
        };
        let mut out = String::new();
        if bold {
            out.push_str(BOLD);
        }
        if self == Style::ActiveMatch {
            out.push_str(REVERSE);
        }
        out.push_str(&fg(color));
        out
    }
}

fn fg((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Dark,
    Light,
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`). ANSI background 7 and
/// 9-15 are light.
fn light_background(colorfgbg: &str) -> bool {
    colorfgbg
        .rsplit(';')
        .next()
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

fn theme() -> Theme {
    static THEME: OnceLock<Theme> = OnceLock::new();
    *THEME.get_or_init(|| {
        match std::env::var("LECTOR_THEME").as_deref() {
            Ok("light") | Ok("l") => return Theme::Light,
            Ok("dark") | Ok("d") => return Theme::Dark,
            _ => {}
        }
        match std::env::var("COLORFGBG") {
            Ok(value) if light_background(&value) => Theme::Light,
            _ => Theme::Dark,
        }
    })
}

fn colors_enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Style `text` for the terminal, or return it untouched when colors are off.
pub fn paint(style: Style, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    let palette = match theme() {
        Theme::Dark => &ONEDARK,
        Theme::Light => &ONELIGHT,
    };
    format!("{}{}{}", style.escape(palette), text, RESET)
}

/// Printed width of `s`, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| {
            if c == '\x1b' {
                in_escape = true;
            } else if in_escape {
                in_escape = c != 'm';
            } else {
                return true;
            }
            false
        })
        .count()
}

/// Pad a styled string with spaces to `width` printed columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

// Panels: ┌─ LABEL ───┐ / │ row │ / ├─ LABEL ───┤ / └───────┘

fn border(s: &str) -> String {
    paint(Style::Muted, s)
}

fn rule(left: char, right: char, label: Option<&str>) {
    let head = match label {
        Some(label) => format!("─ {} ", paint(Style::Heading, label)),
        None => String::new(),
    };
    let fill = "─".repeat(PANEL_WIDTH.saturating_sub(visible_len(&head)));
    println!(
        "{}{}{}",
        border(&left.to_string()),
        head,
        border(&format!("{}{}", fill, right))
    );
}

/// Open a panel titled `label`.
pub fn panel_open(label: &str) {
    rule('┌', '┐', Some(label));
}

/// Start a new titled part of the open panel.
pub fn panel_divider(label: &str) {
    rule('├', '┤', Some(label));
}

pub fn panel_close() {
    rule('└', '┘', None);
}

/// One line of panel content, padded to the right border.
pub fn panel_row(content: &str) {
    println!(
        "{}{}{}",
        border("│"),
        pad_right(content, PANEL_WIDTH),
        border("│")
    );
}

/// A line with one char span marked, trimmed to a window around the span.
///
/// `start` and `end` are char offsets within `line`. Elided context is shown
/// as `…`.
pub fn mark_span(line: &str, start: usize, end: usize, active: bool) -> String {
    let chars: Vec<char> = line.chars().collect();
    let end = end.min(chars.len());
    let start = start.min(end);
    let from = start.saturating_sub(CONTEXT_CHARS);
    let to = (end + CONTEXT_CHARS).min(chars.len());

    let slice = |a: usize, b: usize| -> String {
        chars[a..b].iter().map(|&c| if c == '\t' { ' ' } else { c }).collect()
    };
    let style = if active { Style::ActiveMatch } else { Style::Match };

    format!(
        "{}{}{}{}{}",
        if from > 0 { "…" } else { "" },
        slice(from, start),
        paint(style, &slice(start, end)),
        slice(end, to),
        if to < chars.len() { "…" } else { "" },
    )
}

/// `L12:5` location, 1-based for humans.
pub fn location(line_number: usize, column: usize) -> String {
    paint(Style::Muted, &format!("L{}:{}", line_number + 1, column + 1))
}

/// A bar proportional to `value / max`, `width` cells at most.
pub fn frequency_bar(value: usize, max: usize, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * width as f64).round() as usize;
    paint(Style::Bar, &"█".repeat(cells.clamp(1, width)))
}
