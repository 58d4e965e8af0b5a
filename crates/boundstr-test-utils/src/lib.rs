// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for boundstr crates.
//!
//! Bounded writes must never touch memory past their capacity. The helpers
//! here build buffers with a canary tail so tests can hand out
//! `&mut buf[..capacity]` and then verify the tail is intact.
//!
//! ## License
//!
//! GPL-3.0-only

/// Byte used to fill canary regions.
pub const CANARY: u8 = 0xA5;

/// Returns `s` as bytes followed by a single NUL.
pub fn c_string(s: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(s.len() + 1);
    bytes.extend_from_slice(s.as_bytes());
    bytes.push(0);
    bytes
}

/// Returns a buffer of `capacity + guard` bytes, all set to [`CANARY`].
///
/// Hand `&mut buf[..capacity]` to the code under test, then check
/// `&buf[capacity..]` with [`assert_canary_intact`].
pub fn guarded_buffer(capacity: usize, guard: usize) -> Vec<u8> {
    vec![CANARY; capacity + guard]
}

/// Returns a buffer of `capacity + guard` bytes whose first bytes hold the
/// NUL-terminated `content` and whose remainder is [`CANARY`].
///
/// # Panics
///
/// Panics if `content` plus its terminator does not fit in `capacity`.
pub fn guarded_c_string(content: &str, capacity: usize, guard: usize) -> Vec<u8> {
    assert!(
        content.len() < capacity,
        "guarded_c_string: {} bytes + NUL do not fit in {}",
        content.len(),
        capacity
    );
    let mut buf = guarded_buffer(capacity, guard);
    buf[..content.len()].copy_from_slice(content.as_bytes());
    buf[content.len()] = 0;
    buf
}

/// Asserts every byte of `tail` is still [`CANARY`].
#[track_caller]
pub fn assert_canary_intact(tail: &[u8]) {
    if let Some(pos) = tail.iter().position(|&b| b != CANARY) {
        panic!(
            "canary overwritten at offset {} (found {:#04x})",
            pos, tail[pos]
        );
    }
}

/// Asserts `buf` contains a NUL and returns the bytes before it.
#[track_caller]
pub fn assert_nul_terminated(buf: &[u8]) -> &[u8] {
    match buf.iter().position(|&b| b == 0) {
        Some(pos) => &buf[..pos],
        None => panic!("buffer of {} bytes is not NUL-terminated", buf.len()),
    }
}
