// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place ASCII case folding.
//!
//! Only `a-z` / `A-Z` change. Bytes outside the ASCII letter range, including
//! Latin-1 and UTF-8 continuation bytes, are left as they are.

use crate::nul_str::nul_position;

/// Uppercases the NUL-terminated string in `s`, returning `s` for chaining.
///
/// Folding stops at the first NUL; without one the whole slice is folded.
///
/// # Example
///
/// ```
/// use boundstr::to_upper_in_place;
///
/// let mut name = *b"MixedCase\0tail";
/// to_upper_in_place(&mut name);
/// assert_eq!(&name, b"MIXEDCASE\0tail");
/// ```
#[inline]
pub fn to_upper_in_place(s: &mut [u8]) -> &mut [u8] {
    let end = nul_position(s);
    s[..end].make_ascii_uppercase();
    s
}

/// Lowercases the NUL-terminated string in `s`, returning `s` for chaining.
///
/// Folding stops at the first NUL; without one the whole slice is folded.
///
/// # Example
///
/// ```
/// use boundstr::{to_lower_in_place, to_upper_in_place};
///
/// let mut name = *b"GameMaps.WL6";
/// assert_eq!(to_lower_in_place(to_upper_in_place(&mut name)), b"gamemaps.wl6");
/// ```
#[inline]
pub fn to_lower_in_place(s: &mut [u8]) -> &mut [u8] {
    let end = nul_position(s);
    s[..end].make_ascii_lowercase();
    s
}

/// [`to_upper_in_place`] for UTF-8 strings. ASCII folding keeps the string valid.
#[inline]
pub fn to_upper_str_in_place(s: &mut str) -> &mut str {
    let end = s.find('\0').unwrap_or(s.len());
    s[..end].make_ascii_uppercase();
    s
}

/// [`to_lower_in_place`] for UTF-8 strings. ASCII folding keeps the string valid.
#[inline]
pub fn to_lower_str_in_place(s: &mut str) -> &mut str {
    let end = s.find('\0').unwrap_or(s.len());
    s[..end].make_ascii_lowercase();
    s
}
