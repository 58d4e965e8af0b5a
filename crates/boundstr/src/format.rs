// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded formatted write.
//!
//! Text is rendered first, then copied with [`bounded_copy`], so the
//! destination follows the exact same truncation contract. An interior NUL in
//! the rendered text ends the copy.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::bounded_len::BoundedLen;
use crate::copy::bounded_copy;
use crate::trace::trace_scratch_overflow;

/// Scratch ceiling of [`bounded_format_legacy`], terminator included.
pub const SCRATCH_CAPACITY: usize = 0x8000;

/// Renders `args` and copies the result into `dest`.
///
/// Rendering goes through a growable buffer, so there is no ceiling on the
/// intermediate text; only `dest` bounds the output. The returned
/// [`BoundedLen`] carries the rendered length and reports truncation.
///
/// If a formatting impl returns [`fmt::Error`], the text rendered up to that
/// point is still copied.
///
/// The [`bounded_format!`](crate::bounded_format!) macro wraps this function
/// with `format_args!`.
///
/// # Example
///
/// ```
/// use boundstr::bounded_format;
///
/// let mut dest = [0u8; 8];
/// let out = bounded_format(&mut dest, format_args!("{}", "hello world"));
///
/// assert_eq!(out.len(), 11);
/// assert!(out.is_truncated());
/// assert_eq!(&dest, b"hello w\0");
/// ```
pub fn bounded_format(dest: &mut [u8], args: fmt::Arguments<'_>) -> BoundedLen {
    let mut rendered = String::new();
    // Partial output is kept on error.
    let _ = rendered.write_fmt(args);

    bounded_copy(dest, rendered.as_str())
}

/// Renders `args` through a fixed [`SCRATCH_CAPACITY`] scratch buffer, then
/// copies the result into `dest`.
///
/// Text beyond `SCRATCH_CAPACITY - 1` bytes is dropped *before* the copy and
/// is not reflected in the returned length: that loss is silent. Prefer
/// [`bounded_format`] unless byte-for-byte compatibility with the scratch
/// ceiling is needed.
///
/// # Example
///
/// ```
/// use boundstr::{SCRATCH_CAPACITY, bounded_format_legacy};
///
/// let mut dest = [0u8; 16];
/// let long = "x".repeat(SCRATCH_CAPACITY * 2);
/// let out = bounded_format_legacy(&mut dest, format_args!("{long}"));
///
/// assert_eq!(out.len(), SCRATCH_CAPACITY - 1);
/// ```
pub fn bounded_format_legacy(dest: &mut [u8], args: fmt::Arguments<'_>) -> BoundedLen {
    let mut scratch = ScratchWriter::new(SCRATCH_CAPACITY - 1);
    let _ = scratch.write_fmt(args);

    if scratch.overflowed() {
        trace_scratch_overflow!(SCRATCH_CAPACITY);
    }

    bounded_copy(dest, scratch.as_bytes())
}

/// Accumulates at most `limit` bytes and silently drops the rest.
pub(crate) struct ScratchWriter {
    bytes: Vec<u8>,
    limit: usize,
    overflowed: bool,
}

impl ScratchWriter {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::new(),
            limit,
            overflowed: false,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns `true` once any byte has been dropped.
    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Write for ScratchWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = self.limit - self.bytes.len();
        let n = s.len().min(room);
        self.bytes.extend_from_slice(&s.as_bytes()[..n]);
        self.overflowed |= n < s.len();
        Ok(())
    }
}

/// Formats into a fixed-size buffer with [`bounded_format`] semantics.
///
/// ```
/// use boundstr::bounded_format;
///
/// let mut dest = [0u8; 16];
/// let out = bounded_format!(&mut dest, "E{}M{}.map", 1, 3);
///
/// assert_eq!(out.len(), 8);
/// assert_eq!(&dest[..9], b"E1M3.map\0");
/// ```
#[macro_export]
macro_rules! bounded_format {
    ($dest:expr, $($arg:tt)*) => {
        $crate::bounded_format($dest, ::core::format_args!($($arg)*))
    };
}
