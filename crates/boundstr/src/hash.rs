// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic 32-bit name hash.
//!
//! `h(0) = byte(0)`, `h(i) = h(i - 1) * 31 + byte(i)`, wrapping at 32 bits.
//! Non-cryptographic and unseeded: use it for bucketing names, never for
//! integrity checks.

use core::hash::Hasher;

use crate::nul_str::NulStr;

#[inline]
fn fold(state: u32, bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(state, |h, &b| (h << 5).wrapping_sub(h).wrapping_add(u32::from(b)))
}

/// Hashes a NUL-terminated string.
///
/// The empty string and a null string both hash to 0. Bytes are unsigned, so
/// high (Latin-1) bytes contribute `128..=255`.
///
/// # Example
///
/// ```
/// use boundstr::string_hash;
///
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("a"), 97);
/// assert_eq!(string_hash("ab"), 97 * 31 + 98);
/// assert_eq!(string_hash(b"ab\0cd"), string_hash("ab"));
/// ```
#[inline]
pub fn string_hash<S: NulStr + ?Sized>(s: &S) -> u32 {
    fold(0, s.nul_bytes().unwrap_or_default())
}

/// [`Hasher`] running the [`string_hash`] recurrence.
///
/// Successive writes continue the same recurrence, so writing a string's
/// bytes in one call yields `string_hash` of that string. Use it to bucket
/// name tables deterministically:
///
/// ```
/// use std::collections::HashMap;
/// use std::hash::BuildHasherDefault;
///
/// use boundstr::NameHasher;
///
/// let mut lumps: HashMap<&str, u32, BuildHasherDefault<NameHasher>> = HashMap::default();
/// lumps.insert("E1M1", 0);
/// lumps.insert("E1M2", 1);
/// assert_eq!(lumps.get("E1M2"), Some(&1));
/// ```
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct NameHasher {
    state: u32,
}

impl NameHasher {
    /// Creates a hasher with an empty state.
    #[inline]
    pub const fn new() -> Self {
        Self { state: 0 }
    }

    /// Returns the 32-bit state.
    #[inline]
    pub const fn finish_u32(&self) -> u32 {
        self.state
    }
}

impl Hasher for NameHasher {
    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = fold(self.state, bytes);
    }
}
