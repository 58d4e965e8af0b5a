// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded copy and concatenation (`strlcpy` / `strlcat`).

use crate::bounded_len::BoundedLen;
use crate::nul_str::{NulStr, nul_position};
use crate::trace::trace_truncation;

/// Length of a NUL-terminated string, terminator excluded.
///
/// A null string (`None`) has length 0. Without a terminator the whole slice
/// counts.
///
/// # Example
///
/// ```
/// use boundstr::c_str_len;
///
/// assert_eq!(c_str_len(b"abc\0def"), 3);
/// assert_eq!(c_str_len("abc"), 3);
/// assert_eq!(c_str_len(&None::<&str>), 0);
/// ```
#[inline]
pub fn c_str_len<S: NulStr + ?Sized>(s: &S) -> usize {
    s.nul_bytes().map_or(0, <[u8]>::len)
}

/// Length of a NUL-terminated string, scanning at most `max` bytes.
///
/// Returns `max` when no terminator is found within the first `max` bytes.
///
/// # Example
///
/// ```
/// use boundstr::bounded_c_str_len;
///
/// assert_eq!(bounded_c_str_len(b"abcdef\0", 4), 4);
/// assert_eq!(bounded_c_str_len(b"ab\0", 4), 2);
/// ```
#[inline]
pub fn bounded_c_str_len<S: NulStr + ?Sized>(s: &S, max: usize) -> usize {
    let bytes = s.raw_bytes().unwrap_or_default();
    let limit = max.min(bytes.len());
    nul_position(&bytes[..limit])
}

/// Copies a NUL-terminated string into a fixed-size buffer.
///
/// At most `dest.len() - 1` bytes are copied and `dest` is always
/// NUL-terminated unless it is empty. Bytes after the terminator are left
/// untouched.
///
/// The returned length is the length of `src`, independent of truncation;
/// truncation occurred iff it is `>= dest.len()`. With an empty `dest`
/// nothing is written, but `src` is still measured.
///
/// # Example
///
/// ```
/// use boundstr::bounded_copy;
///
/// let mut dest = [0xffu8; 6];
/// let out = bounded_copy(&mut dest, "VSWAP.WL6");
///
/// assert_eq!(out.len(), 9);
/// assert!(out.is_truncated());
/// assert_eq!(&dest, b"VSWAP\0");
/// ```
pub fn bounded_copy<S: NulStr + ?Sized>(dest: &mut [u8], src: &S) -> BoundedLen {
    let src = src.nul_bytes().unwrap_or_default();
    let capacity = dest.len();

    if capacity != 0 {
        let n = src.len().min(capacity - 1);
        dest[..n].copy_from_slice(&src[..n]);
        dest[n] = 0;
    }

    let out = BoundedLen::new(src.len(), capacity);
    trace_truncation!("bounded_copy", out);
    out
}

/// Appends a NUL-terminated string to the NUL-terminated string in `dest`.
///
/// `dest.len()` is the *total* capacity of the buffer, not the room left.
/// The existing terminator is searched within that capacity only; when there
/// is none the buffer is considered full and nothing is written.
///
/// Returns `min(dest.len(), strlen(dest)) + strlen(src)`. Truncation
/// occurred iff that is `>= dest.len()`.
///
/// # Example
///
/// ```
/// use boundstr::bounded_append;
///
/// let mut path = [0u8; 12];
/// path[..5].copy_from_slice(b"maps/");
///
/// let out = bounded_append(&mut path, "e1m1.map");
/// assert_eq!(out.len(), 13);
/// assert!(out.is_truncated());
/// assert_eq!(&path, b"maps/e1m1.m\0");
/// ```
pub fn bounded_append<S: NulStr + ?Sized>(dest: &mut [u8], src: &S) -> BoundedLen {
    let src = src.nul_bytes().unwrap_or_default();
    let capacity = dest.len();
    let dlen = nul_position(dest);

    // No terminator inside capacity: nothing can be appended.
    if dlen == capacity {
        let out = BoundedLen::new(dlen.saturating_add(src.len()), capacity);
        trace_truncation!("bounded_append", out);
        return out;
    }

    let room = capacity - dlen - 1;
    let n = src.len().min(room);
    dest[dlen..dlen + n].copy_from_slice(&src[..n]);
    dest[dlen + n] = 0;

    let out = BoundedLen::new(dlen + src.len(), capacity);
    trace_truncation!("bounded_append", out);
    out
}
