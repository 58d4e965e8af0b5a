// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::bounded_len::BoundedLen;
use crate::case::{to_lower_in_place, to_upper_in_place};
use crate::compare::ci_eq;
use crate::copy::{bounded_append, bounded_copy};
use crate::error::BoundedError;
use crate::hash::string_hash;
use crate::nul_str::{NulStr, nul_position};

/// A stack buffer of `N` bytes holding a NUL-terminated string.
///
/// All writes go through [`bounded_copy`] and [`bounded_append`], so the
/// content always fits in `N - 1` bytes plus the terminator. A sticky flag
/// remembers whether any write lost data.
///
/// `FixedString` implements [`fmt::Write`]. Writes never fail; they truncate
/// and set the flag, so `write!` always runs to completion without
/// allocating. Formatted text is NUL-terminated like the output of
/// [`bounded_format`](crate::bounded_format): once a written fragment carries
/// a NUL, the text after it and every later formatted write are ignored until
/// [`clear`](Self::clear) or [`set`](Self::set).
///
/// # Example
///
/// ```rust
/// use core::fmt::Write;
///
/// use boundstr::FixedString;
///
/// let mut name = FixedString::<13>::new();
/// write!(name, "MAPHEAD.{}", "wl6").unwrap();
/// name.make_ascii_uppercase();
///
/// assert_eq!(name.as_str(), Ok("MAPHEAD.WL6"));
/// assert!(!name.is_truncated());
///
/// name.push("_backup");
/// assert_eq!(name.as_str(), Ok("MAPHEAD.WL6_"));
/// assert!(name.is_truncated());
/// ```
#[derive(Clone)]
pub struct FixedString<const N: usize> {
    buf: [u8; N],
    truncated: bool,
    terminated: bool,
}

impl<const N: usize> FixedString<N> {
    /// Creates an empty string.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; N],
            truncated: false,
            terminated: false,
        }
    }

    /// Creates a string holding as much of `src` as fits.
    pub fn from_nul_str<S: NulStr + ?Sized>(src: &S) -> Self {
        let mut s = Self::new();
        let out = bounded_copy(&mut s.buf, src);
        s.record(out);
        s
    }

    /// Appends as much of `src` as fits.
    pub fn push<S: NulStr + ?Sized>(&mut self, src: &S) -> BoundedLen {
        let out = bounded_append(&mut self.buf, src);
        self.record(out);
        out
    }

    /// Replaces the content with as much of `src` as fits.
    ///
    /// Resets the truncation flag before copying.
    pub fn set<S: NulStr + ?Sized>(&mut self, src: &S) -> BoundedLen {
        self.truncated = false;
        self.terminated = false;
        let out = bounded_copy(&mut self.buf, src);
        self.record(out);
        out
    }

    #[inline]
    fn record(&mut self, out: BoundedLen) {
        self.truncated |= out.is_truncated();
    }

    /// Empties the string and resets the truncation flag.
    pub fn clear(&mut self) {
        if let Some(first) = self.buf.first_mut() {
            *first = 0;
        }
        self.truncated = false;
        self.terminated = false;
    }

    /// Length in bytes, terminator excluded.
    #[inline]
    pub fn len(&self) -> usize {
        nul_position(&self.buf)
    }

    /// Returns `true` if the string is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total capacity in bytes, terminator included.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if any write since creation or the last
    /// [`clear`](Self::clear) / [`set`](Self::set) lost data.
    #[inline]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// The string bytes, terminator excluded.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// The string bytes including the terminator.
    ///
    /// Only a zero-capacity string has no terminator; it yields an empty slice.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..(self.len() + 1).min(N)]
    }

    /// The content as `&str`.
    ///
    /// # Errors
    ///
    /// Returns [`BoundedError::Utf8`] when the bytes are not valid UTF-8, for
    /// example after a multi-byte character was cut by truncation.
    pub fn as_str(&self) -> Result<&str, BoundedError> {
        core::str::from_utf8(self.as_bytes()).map_err(|e| BoundedError::Utf8 {
            valid_up_to: e.valid_up_to(),
        })
    }

    /// Uppercases the content in place.
    pub fn make_ascii_uppercase(&mut self) -> &mut Self {
        to_upper_in_place(&mut self.buf);
        self
    }

    /// Lowercases the content in place.
    pub fn make_ascii_lowercase(&mut self) -> &mut Self {
        to_lower_in_place(&mut self.buf);
        self
    }

    /// [`string_hash`] of the content.
    #[inline]
    pub fn string_hash(&self) -> u32 {
        string_hash(self)
    }

    /// Case-insensitive equality with the rules of [`ci_compare`](crate::ci_compare).
    ///
    /// An empty `FixedString` is never equal to anything.
    #[inline]
    pub fn ci_eq<S: NulStr + ?Sized>(&self, other: &S) -> bool {
        ci_eq(self, other)
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NulStr for FixedString<N> {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(&self.buf)
    }
}

impl<const N: usize> PartialEq for FixedString<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize> fmt::Write for FixedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.terminated {
            return Ok(());
        }

        self.terminated = s.contains('\0');
        self.push(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedString")
            .field("value", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .field("capacity", &N)
            .field("truncated", &self.truncated)
            .finish()
    }
}
