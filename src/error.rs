// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the edges of the crate.
//!
//! Matching, word extraction, suggestions and highlighting cannot fail: bad
//! input degrades to an empty result. Only loading a document and reading
//! options can go wrong, and those errors live here.

use std::path::PathBuf;

/// Error type for document loading and option parsing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid UTF-8.
    #[error("{} is not valid UTF-8 text", path.display())]
    InvalidUtf8 { path: PathBuf },
    /// Options JSON did not parse.
    #[error("invalid search options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
    /// An option value is outside its allowed range.
    #[error("option `{name}` must be at least 1, got {value}")]
    OptionOutOfRange { name: &'static str, value: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
