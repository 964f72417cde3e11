// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search options shared by the session, the browser bindings and the CLI.

use crate::error::{Error, Result};
use crate::suggest::DEFAULT_MAX_SUGGESTIONS;
use serde::{Deserialize, Serialize};

/// Options controlling a search.
///
/// Deserializes from a partial JSON object; missing fields take defaults.
///
/// ```
/// use lector::SearchOptions;
///
/// let options = SearchOptions::from_json(r#"{"caseSensitive": true}"#).unwrap();
/// assert!(options.case_sensitive);
/// assert_eq!(options.max_suggestions, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Compare without folding case (default: false).
    pub case_sensitive: bool,
    /// Maximum autocomplete suggestions (default: 5).
    pub max_suggestions: usize,
    /// Cap on listed results; `None` lists all (default: None).
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            limit: None,
        }
    }
}

impl SearchOptions {
    /// Parse and validate options from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: SearchOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(Error::OptionOutOfRange {
                name: "maxSuggestions",
                value: 0,
            });
        }
        if self.limit == Some(0) {
            return Err(Error::OptionOutOfRange {
                name: "limit",
                value: 0,
            });
        }
        Ok(())
    }
}
