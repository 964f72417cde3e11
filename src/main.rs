use anyhow::{Context, Result};
use clap::Parser;
use lector::{
    extract_words, get_autocomplete_suggestions, highlight_text_with, load_document,
    render_html_with, Markup, SearchOptions, SearchResult, SearchSession,
};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::display::{self, paint, Style};
use cli::{Cli, Commands};

/// Search output for `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchReport<'a> {
    query: &'a str,
    case_sensitive: bool,
    total: usize,
    active_index: Option<usize>,
    counter: Option<String>,
    results: &'a [SearchResult],
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for JSON and HTML.
///
/// `LECTOR_LOG` takes precedence over `RUST_LOG`; the default is `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("LECTOR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            file,
            query,
            case_sensitive,
            limit,
            active,
            json,
        } => {
            let options = SearchOptions {
                case_sensitive,
                limit,
                ..SearchOptions::default()
            };
            run_search(&file, &query, options, active, json)
        }
        Commands::Suggest {
            file,
            prefix,
            max,
            json,
        } => {
            let options = SearchOptions {
                max_suggestions: max,
                ..SearchOptions::default()
            };
            run_suggest(&file, &prefix, options, json)
        }
        Commands::Words { file, limit, json } => run_words(&file, limit, json),
        Commands::Highlight {
            file,
            query,
            case_sensitive,
            active,
            lines,
            raw,
        } => run_highlight(&file, &query, case_sensitive, active, lines, raw),
    }
}

fn load(file: &Path) -> Result<String> {
    load_document(file).with_context(|| format!("could not load document {}", file.display()))
}

/// Open a session over `file` and run `query` in it.
fn open_session(
    file: &Path,
    query: &str,
    options: SearchOptions,
    active: Option<usize>,
) -> Result<SearchSession> {
    options.validate().context("invalid options")?;
    let mut session = SearchSession::with_options(load(file)?, options);
    session.search(query);
    if let Some(index) = active {
        if !session.set_active(index) {
            anyhow::bail!(
                "--active {} is out of range ({} results)",
                index,
                session.results().len()
            );
        }
    }
    Ok(session)
}

fn run_search(
    file: &Path,
    query: &str,
    options: SearchOptions,
    active: Option<usize>,
    json: bool,
) -> Result<()> {
    let limit = options.limit;
    let session = open_session(file, query, options, active)?;
    let results = session.results();
    let shown = &results[..limit.unwrap_or(results.len()).min(results.len())];

    if json {
        let report = SearchReport {
            query,
            case_sensitive: session.case_sensitive(),
            total: results.len(),
            active_index: session.active_index(),
            counter: session.counter(),
            results: shown,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let lines: Vec<&str> = session.text().split('\n').collect();
    let line_starts = line_starts(&lines);

    display::panel_open("SEARCH");
    display::panel_row(&format!(
        " {} {}   {} {}   {}",
        paint(Style::Muted, "query"),
        paint(Style::Query, &format!("{:?}", query)),
        paint(Style::Muted, "matches"),
        paint(Style::Count, &results.len().to_string()),
        paint(
            Style::Muted,
            if session.case_sensitive() {
                "case-sensitive"
            } else {
                "case-insensitive"
            }
        ),
    ));

    if !shown.is_empty() {
        display::panel_divider("MATCHES");
        for result in shown {
            let line = lines.get(result.line_number).copied().unwrap_or_default();
            let column = result.start_pos - line_starts[result.line_number];
            let is_active = session.active_index() == Some(result.index);
            display::panel_row(&format!(
                " {} {} {}",
                display::pad_right(&paint(Style::Index, &format!("#{}", result.index + 1)), 5),
                display::pad_right(&display::location(result.line_number, column), 10),
                display::mark_span(line, column, column + result.len(), is_active),
            ));
        }
        if shown.len() < results.len() {
            display::panel_row(&paint(
                Style::Muted,
                &format!(" … {} more", results.len() - shown.len()),
            ));
        }
    }
    display::panel_close();

    if let Some(counter) = session.counter() {
        println!("{}", paint(Style::Index, &counter));
    }
    Ok(())
}

/// Char offset where each line starts, counting one char per `\n`.
fn line_starts(lines: &[&str]) -> Vec<usize> {
    let mut starts = Vec::with_capacity(lines.len());
    let mut offset = 0usize;
    for line in lines {
        starts.push(offset);
        offset += line.chars().count() + 1;
    }
    starts
}

fn run_suggest(file: &Path, prefix: &str, options: SearchOptions, json: bool) -> Result<()> {
    options.validate().context("invalid options")?;
    let words = extract_words(&load(file)?);
    let suggestions = get_autocomplete_suggestions(prefix, &words, options.max_suggestions);

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }
    if suggestions.is_empty() {
        eprintln!("no suggestions for {:?}", prefix);
        return Ok(());
    }
    for suggestion in &suggestions {
        let frequency = words
            .iter()
            .find(|w| &w.word == suggestion)
            .map_or(0, |w| w.frequency);
        println!(
            "{} {}",
            display::pad_right(&paint(Style::Query, suggestion), 24),
            paint(Style::Muted, &format!("×{}", frequency))
        );
    }
    Ok(())
}

fn run_words(file: &Path, limit: usize, json: bool) -> Result<()> {
    let words = extract_words(&load(file)?);
    let shown = &words[..limit.min(words.len())];

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    let max = shown.first().map_or(0, |w| w.frequency);
    display::panel_open("VOCABULARY");
    display::panel_row(&format!(
        " {} distinct words",
        paint(Style::Count, &words.len().to_string())
    ));
    if !shown.is_empty() {
        display::panel_divider("TOP WORDS");
        for word in shown {
            display::panel_row(&format!(
                " {} {} {}",
                display::pad_right(&paint(Style::Word, &word.word), 24),
                display::pad_right(&word.frequency.to_string(), 6),
                display::frequency_bar(word.frequency, max, 40),
            ));
        }
    }
    display::panel_close();
    Ok(())
}

fn run_highlight(
    file: &Path,
    query: &str,
    case_sensitive: bool,
    active: Option<usize>,
    lines: bool,
    raw: bool,
) -> Result<()> {
    let options = SearchOptions {
        case_sensitive,
        ..SearchOptions::default()
    };
    let session = open_session(file, query, options, active)?;
    let markup = if raw { Markup::default() } else { Markup::escaped() };

    let html = if lines {
        render_html_with(
            session.text(),
            session.results(),
            session.active_index(),
            &markup,
        )
    } else {
        highlight_text_with(
            session.text(),
            session.results(),
            session.active_index(),
            &markup,
        )
    };
    print!("{}", html);
    Ok(())
}
