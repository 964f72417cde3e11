// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete drawn from the document's own vocabulary.
//!
//! [`extract_words`] runs once per document and produces a frequency-sorted
//! word list. [`get_autocomplete_suggestions`] runs on every keystroke and
//! only filters that list, so the expensive part is paid once.

mod autocomplete;
mod words;

pub use autocomplete::*;
pub use words::*;
