// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding things in the document, and moving between what was found.
//!
//! The match finder is a plain line-by-line substring scan. A reader pastes
//! one document and types a query one keystroke at a time, so the whole
//! document is rescanned on every call. There is no index to keep in sync.

mod matcher;
pub mod navigate;

pub use matcher::*;
