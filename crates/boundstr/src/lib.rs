// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded string primitives for fixed-size, NUL-terminated buffers.
//!
//! Every write operation takes a caller-owned `&mut [u8]` whose length is the
//! *total* capacity of the destination. Nothing is ever written past that
//! slice, and the destination is always NUL-terminated when it has room for
//! at least one byte.
//!
//! # Operations
//!
//! - [`bounded_copy`] / [`bounded_append`]: `strlcpy` / `strlcat` semantics
//! - [`ci_compare_n`] / [`ci_compare`]: ASCII case-insensitive *equality*
//! - [`to_upper_in_place`] / [`to_lower_in_place`]: ASCII case folding
//! - [`string_hash`]: deterministic 32-bit name hash (`h * 31 + byte`)
//! - [`bounded_format`] / [`bounded_format!`]: formatted write with truncation
//!
//! # Truncation
//!
//! Bounded writes never fail. They return a [`BoundedLen`] carrying the
//! logical (untruncated) length and the capacity it was written against.
//! Truncation happened iff `len() >= capacity()`:
//!
//! ```rust
//! use boundstr::bounded_copy;
//!
//! let mut name = [0u8; 8];
//! let out = bounded_copy(&mut name, "WOLF3D.EXE");
//!
//! assert_eq!(out.len(), 10);
//! assert!(out.is_truncated());
//! assert_eq!(&name, b"WOLF3D.\0");
//! ```
//!
//! Callers that prefer `?` propagation use [`BoundedLen::into_result`]:
//!
//! ```rust
//! use boundstr::{BoundedError, bounded_append, bounded_copy};
//!
//! fn build_path(dest: &mut [u8]) -> Result<usize, BoundedError> {
//!     bounded_copy(dest, "maps/").into_result()?;
//!     bounded_append(dest, "e1m1.map").into_result()
//! }
//!
//! let mut path = [0u8; 32];
//! assert_eq!(build_path(&mut path), Ok(13));
//!
//! let mut short = [0u8; 8];
//! assert!(build_path(&mut short).is_err());
//! ```
//!
//! # Inputs
//!
//! Read-only string arguments accept anything implementing [`NulStr`]: `str`,
//! byte slices and arrays, `CStr`, `String`, `Vec<u8>` and [`FixedString`].
//! `Option<T>` is accepted too, with `None` standing in for a null pointer.
//!
//! # Features
//!
//! - `log`: emit truncation events through the `log` facade.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod bounded_len;
mod case;
mod compare;
mod copy;
mod error;
mod fixed_string;
mod format;
mod hash;
mod nul_str;
mod trace;

pub use bounded_len::BoundedLen;
pub use case::{to_lower_in_place, to_lower_str_in_place, to_upper_in_place, to_upper_str_in_place};
pub use compare::{CI_COMPARE_BOUND, CI_EQUAL, CI_NOT_EQUAL, ci_compare, ci_compare_n, ci_eq, ci_eq_n};
pub use copy::{bounded_append, bounded_c_str_len, bounded_copy, c_str_len};
pub use error::BoundedError;
pub use fixed_string::FixedString;
pub use format::{SCRATCH_CAPACITY, bounded_format, bounded_format_legacy};
pub use hash::{NameHasher, string_hash};
pub use nul_str::NulStr;
