// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning match spans into markup.
//!
//! Two renderers share one span walker. [`highlight_text`] wraps matches in
//! place and returns a single string. [`render_lines`] does the same and then
//! cuts the result into one element per line, flagging the lines that hold a
//! match or the active match so the page can tint them.
//!
//! The walker goes left to right, copying unmatched text and wrapping matched
//! text into one output buffer. Splicing back to front into the original
//! string gives the same output, just with a reallocation per match.

mod markup;
mod render;

pub use markup::Markup;
pub use render::*;
