// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Truncation tracing, compiled out unless the `log` feature is enabled.

macro_rules! trace_truncation {
    ($op:literal, $out:expr) => {{
        #[cfg(feature = "log")]
        {
            let out: $crate::BoundedLen = $out;
            if out.is_truncated() {
                log::trace!(
                    "{}: truncated {} bytes into {}-byte buffer",
                    $op,
                    out.len(),
                    out.capacity()
                );
            }
        }
    }};
}

macro_rules! trace_scratch_overflow {
    ($capacity:expr) => {{
        #[cfg(feature = "log")]
        {
            log::debug!(
                "bounded_format_legacy: output exceeded {}-byte scratch buffer",
                $capacity
            );
        }
    }};
}

pub(crate) use trace_scratch_overflow;
pub(crate) use trace_truncation;
