// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec::Vec;
use core::ffi::CStr;

/// Index of the first NUL in `bytes`, or `bytes.len()` if there is none.
#[inline]
pub(crate) fn nul_position(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// A read-only, possibly NUL-terminated string argument.
///
/// The logical string is every byte before the first `0x00`, or the whole
/// slice when it contains none. Implementations only expose their raw bytes;
/// the terminator scan is shared.
///
/// `Option<T>` implements the trait with `None` meaning "null string". Most
/// operations treat a null string like an empty one; [`ci_compare_n`] treats
/// both as never equal to anything.
///
/// [`ci_compare_n`]: crate::ci_compare_n
pub trait NulStr {
    /// Returns the raw backing bytes, or `None` for a null string.
    fn raw_bytes(&self) -> Option<&[u8]>;

    /// Returns the bytes before the first NUL, or `None` for a null string.
    #[inline]
    fn nul_bytes(&self) -> Option<&[u8]> {
        self.raw_bytes().map(|bytes| &bytes[..nul_position(bytes)])
    }
}

impl NulStr for [u8] {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> NulStr for [u8; N] {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl NulStr for str {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl NulStr for CStr {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(self.to_bytes())
    }
}

impl NulStr for Vec<u8> {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(self.as_slice())
    }
}

impl NulStr for String {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        Some(self.as_bytes())
    }
}

impl<T: NulStr + ?Sized> NulStr for &T {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        (**self).raw_bytes()
    }
}

impl<T: NulStr + ?Sized> NulStr for &mut T {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        (**self).raw_bytes()
    }
}

impl<T: NulStr> NulStr for Option<T> {
    #[inline]
    fn raw_bytes(&self) -> Option<&[u8]> {
        self.as_ref().and_then(NulStr::raw_bytes)
    }
}
