// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::BoundedError;

/// Outcome of a bounded write.
///
/// Carries the logical length of the result (what would have been written
/// with unlimited room, terminator excluded) and the capacity of the
/// destination. The pair keeps the `strlcpy` return convention while making
/// truncation explicit.
///
/// # Example
///
/// ```rust
/// use boundstr::bounded_copy;
///
/// let mut buf = [0u8; 4];
///
/// let out = bounded_copy(&mut buf, "abc");
/// assert_eq!(out.len(), 3);
/// assert!(!out.is_truncated());
///
/// let out = bounded_copy(&mut buf, "abcd");
/// assert_eq!(out.len(), 4);
/// assert!(out.is_truncated());
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct BoundedLen {
    len: usize,
    capacity: usize,
}

impl BoundedLen {
    #[inline]
    pub(crate) const fn new(len: usize, capacity: usize) -> Self {
        Self { len, capacity }
    }

    /// Logical length of the result, terminator excluded.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the logical result is the empty string.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity of the destination, terminator included.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the result did not fit (`len >= capacity`).
    ///
    /// A zero-capacity destination always reports truncation since not even
    /// the terminator could be stored.
    #[inline]
    pub const fn is_truncated(&self) -> bool {
        self.len >= self.capacity
    }

    /// Converts truncation into an error.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedError::Truncated`] when [`is_truncated`](Self::is_truncated)
    /// is `true`.
    #[inline]
    pub const fn into_result(self) -> Result<usize, BoundedError> {
        if self.is_truncated() {
            Err(BoundedError::Truncated {
                len: self.len,
                capacity: self.capacity,
            })
        } else {
            Ok(self.len)
        }
    }
}
