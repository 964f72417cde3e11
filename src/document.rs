// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a document's text from disk or stdin.
//!
//! The text is kept exactly as read. Line endings are not normalized, so a
//! `\r\n` file keeps its `\r` at the end of each line and offsets count it.

use crate::error::{Error, Result};
use std::io::Read;
use std::path::Path;

/// Path argument meaning "read stdin".
pub const STDIN_PATH: &str = "-";

/// Read a document from `path`, or from stdin when `path` is `-`.
pub fn load_document(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN_PATH {
        return read_document(std::io::stdin().lock(), path);
    }
    let file = std::fs::File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_document(file, path)
}

/// Read a whole document from `reader`. `path` labels errors.
pub fn read_document(mut reader: impl Read, path: &Path) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    tracing::debug!(path = %path.display(), chars = text.chars().count(), "loaded document");
    Ok(text)
}
