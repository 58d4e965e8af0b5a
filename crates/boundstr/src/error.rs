// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for boundstr.

use thiserror::Error;

/// Errors surfaced by the typed escape hatches of this crate.
///
/// The primitives themselves never fail; they report truncation through
/// [`BoundedLen`](crate::BoundedLen). These variants only appear when a caller
/// asks for a `Result`.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoundedError {
    /// The logical length did not fit in the destination.
    #[error("truncated: {len} bytes do not fit in a {capacity}-byte buffer")]
    Truncated {
        /// Logical (untruncated) length, terminator excluded.
        len: usize,
        /// Total capacity of the destination, terminator included.
        capacity: usize,
    },

    /// The buffer content is not valid UTF-8.
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    Utf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },
}
