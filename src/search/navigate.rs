// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stepping the active result forward and backward.
//!
//! Both directions wrap around. With nothing active, "next" lands on the first
//! result and "previous" on the last, which is what arrow buttons should do
//! when the reader has clicked away.

/// The result to activate after `active` when stepping forward.
///
/// Returns `None` only when there are no results.
pub fn next_index(active: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match active {
        None => 0,
        Some(i) => (i + 1) % count,
    })
}

/// The result to activate before `active` when stepping backward.
pub fn prev_index(active: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match active {
        None => count - 1,
        Some(i) => (i % count + count - 1) % count,
    })
}

/// Human-readable position of the active result, e.g. `"2 of 7"`.
///
/// `None` when there are no results. With results but nothing active the
/// position reads `0`.
pub fn counter_label(active: Option<usize>, count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }
    let current = active.map_or(0, |i| i + 1);
    Some(format!("{} of {}", current, count))
}
