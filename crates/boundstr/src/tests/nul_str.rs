// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec;
use core::ffi::CStr;

use crate::nul_str::{NulStr, nul_position};

// =============================================================================
// nul_position()
// =============================================================================

#[test]
fn test_nul_position_finds_first_nul() {
    assert_eq!(nul_position(b"ab\0cd\0"), 2);
}

#[test]
fn test_nul_position_without_nul_is_len() {
    assert_eq!(nul_position(b"abc"), 3);
    assert_eq!(nul_position(b""), 0);
}

// =============================================================================
// nul_bytes()
// =============================================================================

#[test]
fn test_slice_stops_at_nul() {
    let bytes: &[u8] = b"name\0garbage";
    assert_eq!(bytes.nul_bytes(), Some(&b"name"[..]));
}

#[test]
fn test_array_without_nul_uses_whole_array() {
    assert_eq!([b'a', b'b'].nul_bytes(), Some(&b"ab"[..]));
}

#[test]
fn test_str_and_string() {
    assert_eq!("abc".nul_bytes(), Some(&b"abc"[..]));
    assert_eq!(String::from("a\0b").nul_bytes(), Some(&b"a"[..]));
}

#[test]
fn test_cstr_excludes_terminator() {
    let c = CStr::from_bytes_with_nul(b"lump\0").expect("Failed to build CStr");
    assert_eq!(c.nul_bytes(), Some(&b"lump"[..]));
}

#[test]
fn test_vec() {
    assert_eq!(vec![b'x', 0, b'y'].nul_bytes(), Some(&b"x"[..]));
}

#[test]
fn test_option_none_is_null() {
    let none: Option<&str> = None;
    assert_eq!(none.nul_bytes(), None);
    assert_eq!(none.raw_bytes(), None);
}

#[test]
fn test_option_some_delegates() {
    assert_eq!(Some("ab\0c").nul_bytes(), Some(&b"ab"[..]));
}

#[test]
fn test_references_delegate() {
    let s = "abc";
    let r = &&s;
    assert_eq!(r.nul_bytes(), Some(&b"abc"[..]));

    let mut buf = *b"xy\0";
    let m = &mut buf;
    assert_eq!(NulStr::nul_bytes(&m), Some(&b"xy"[..]));
}
