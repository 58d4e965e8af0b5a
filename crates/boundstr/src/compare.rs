// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ASCII case-insensitive equality.
//!
//! These are equality tests, not orderings: the result is either
//! [`CI_EQUAL`] or [`CI_NOT_EQUAL`], never a sign to sort by.

use crate::nul_str::NulStr;

/// Returned by [`ci_compare_n`] and [`ci_compare`] when the strings match.
pub const CI_EQUAL: i32 = 0;

/// Returned by [`ci_compare_n`] and [`ci_compare`] when the strings differ.
pub const CI_NOT_EQUAL: i32 = -1;

/// Character budget used by [`ci_compare`].
///
/// Large enough to be unbounded for any name this crate is meant to handle.
/// Strings sharing a longer case-insensitive prefix compare equal.
pub const CI_COMPARE_BOUND: usize = 99_999;

#[inline]
fn byte_at(s: &[u8], i: usize) -> u8 {
    s.get(i).copied().unwrap_or(0)
}

/// Compares at most `n` characters of two strings, ignoring ASCII case.
///
/// Returns [`CI_EQUAL`] (0) or [`CI_NOT_EQUAL`] (-1).
///
/// The strings are scanned in lockstep. The scan reports equality once `n`
/// characters have been consumed, or after a NUL on `a` matched `b`. Any
/// mismatching pair before that makes the strings unequal.
///
/// A null or empty string on *either* side is never equal to anything,
/// another empty string included. Callers that rely on the classic
/// "two empty strings are equal" rule must check for emptiness first.
///
/// # Example
///
/// ```
/// use boundstr::{CI_EQUAL, CI_NOT_EQUAL, ci_compare_n};
///
/// assert_eq!(ci_compare_n("abcXXX", "ABCyyy", 3), CI_EQUAL);
/// assert_eq!(ci_compare_n("abcXXX", "ABCyyy", 4), CI_NOT_EQUAL);
/// assert_eq!(ci_compare_n("", "", 4), CI_NOT_EQUAL);
/// ```
pub fn ci_compare_n<A, B>(a: &A, b: &B, n: usize) -> i32
where
    A: NulStr + ?Sized,
    B: NulStr + ?Sized,
{
    let (a, b) = match (a.nul_bytes(), b.nul_bytes()) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => (a, b),
        _ => return CI_NOT_EQUAL,
    };

    let mut remaining = n;
    let mut i = 0;

    loop {
        let c1 = byte_at(a, i);
        let c2 = byte_at(b, i);
        i += 1;

        if remaining == 0 {
            return CI_EQUAL;
        }
        remaining -= 1;

        if c1 != c2 && c1.to_ascii_uppercase() != c2.to_ascii_uppercase() {
            return CI_NOT_EQUAL;
        }

        if c1 == 0 {
            return CI_EQUAL;
        }
    }
}

/// Compares two strings ignoring ASCII case.
///
/// Same contract as [`ci_compare_n`] with a budget of [`CI_COMPARE_BOUND`].
///
/// # Example
///
/// ```
/// use boundstr::{CI_EQUAL, CI_NOT_EQUAL, ci_compare};
///
/// assert_eq!(ci_compare("ABC", "abc"), CI_EQUAL);
/// assert_eq!(ci_compare("abc", "abd"), CI_NOT_EQUAL);
/// assert_eq!(ci_compare(&None::<&str>, "x"), CI_NOT_EQUAL);
/// ```
#[inline]
pub fn ci_compare<A, B>(a: &A, b: &B) -> i32
where
    A: NulStr + ?Sized,
    B: NulStr + ?Sized,
{
    ci_compare_n(a, b, CI_COMPARE_BOUND)
}

/// `bool` form of [`ci_compare_n`].
#[inline]
pub fn ci_eq_n<A, B>(a: &A, b: &B, n: usize) -> bool
where
    A: NulStr + ?Sized,
    B: NulStr + ?Sized,
{
    ci_compare_n(a, b, n) == CI_EQUAL
}

/// `bool` form of [`ci_compare`].
#[inline]
pub fn ci_eq<A, B>(a: &A, b: &B) -> bool
where
    A: NulStr + ?Sized,
    B: NulStr + ?Sized,
{
    ci_compare(a, b) == CI_EQUAL
}
