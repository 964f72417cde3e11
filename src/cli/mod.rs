// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lector command-line interface.
//!
//! Four subcommands over one document: `search` lists matches, `suggest`
//! completes a prefix from the document's words, `words` prints the
//! vocabulary, and `highlight` emits the same HTML the reader page renders.
//! Every command takes a file path, or `-` to read the document from stdin.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lector",
    about = "Search, autocomplete and highlight within a text document",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every occurrence of a query
    Search {
        /// Document to search (`-` for stdin)
        file: PathBuf,

        /// Literal text to find
        query: String,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,

        /// Maximum number of matches to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Result to mark as active (0-based)
        #[arg(long)]
        active: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest completions for a prefix from the document's own words
    Suggest {
        /// Document to draw words from (`-` for stdin)
        file: PathBuf,

        /// Prefix typed so far (at least two characters)
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short, long, default_value = "5")]
        max: usize,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the document's vocabulary, most frequent first
    Words {
        /// Document to read (`-` for stdin)
        file: PathBuf,

        /// Maximum number of words to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print the word list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit the document as HTML with matches highlighted
    Highlight {
        /// Document to render (`-` for stdin)
        file: PathBuf,

        /// Literal text to highlight
        query: String,

        /// Match case exactly
        #[arg(short, long)]
        case_sensitive: bool,

        /// Result to mark as active (0-based, default: first)
        #[arg(long)]
        active: Option<usize>,

        /// Wrap each line in its own element
        #[arg(long)]
        lines: bool,

        /// Do not HTML-escape document text
        #[arg(long)]
        raw: bool,
    },
}
