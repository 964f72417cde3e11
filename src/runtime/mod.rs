// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime bindings for the browser.
//!
//! The reader page is the production consumer, and it runs this crate as a
//! WASM module. Everything here is a thin shim: values are converted at the
//! boundary and the work is done by the same functions native callers use.

#[cfg(feature = "wasm")]
pub mod wasm;
