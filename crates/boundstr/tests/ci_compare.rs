// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod ci_compare_tests {
    use std::ffi::CString;

    use boundstr::{CI_COMPARE_BOUND, CI_EQUAL, CI_NOT_EQUAL, ci_compare, ci_compare_n, ci_eq, ci_eq_n};

    // =========================================================================
    // ci_compare()
    // =========================================================================

    #[test]
    fn test_equal_ignoring_case() {
        assert_eq!(ci_compare("ABC", "abc"), CI_EQUAL);
        assert_eq!(ci_compare("GameMaps.WL6", "GAMEMAPS.wl6"), CI_EQUAL);
    }

    #[test]
    fn test_not_equal() {
        assert_eq!(ci_compare("abc", "abd"), CI_NOT_EQUAL);
    }

    #[test]
    fn test_is_not_an_ordering() {
        // Both directions report the same value.
        assert_eq!(ci_compare("abc", "abd"), -1);
        assert_eq!(ci_compare("abd", "abc"), -1);
    }

    #[test]
    fn test_prefix_is_not_equal() {
        assert_eq!(ci_compare("abc", "abcd"), CI_NOT_EQUAL);
        assert_eq!(ci_compare("abcd", "abc"), CI_NOT_EQUAL);
    }

    #[test]
    fn test_empty_is_never_equal() {
        assert_eq!(ci_compare("", "anything"), CI_NOT_EQUAL);
        assert_eq!(ci_compare("anything", ""), CI_NOT_EQUAL);
        assert_eq!(ci_compare("", ""), CI_NOT_EQUAL);
    }

    #[test]
    fn test_null_is_never_equal() {
        let null: Option<&str> = None;
        assert_eq!(ci_compare(&null, "x"), CI_NOT_EQUAL);
        assert_eq!(ci_compare("x", &null), CI_NOT_EQUAL);
        assert_eq!(ci_compare(&null, &null), CI_NOT_EQUAL);
    }

    #[test]
    fn test_leading_nul_counts_as_empty() {
        assert_eq!(ci_compare(b"\0abc", b"\0abc"), CI_NOT_EQUAL);
    }

    #[test]
    fn test_content_after_nul_is_ignored() {
        assert_eq!(ci_compare(b"abc\0xyz", "ABC"), CI_EQUAL);
        assert_eq!(ci_compare(b"abc\0xyz", b"abc\0123"), CI_EQUAL);
    }

    #[test]
    fn test_only_ascii_letters_fold() {
        assert_eq!(ci_compare("a-1_", "A-1_"), CI_EQUAL);
        assert_eq!(ci_compare("[", "{"), CI_NOT_EQUAL);
        // Latin-1 'é' (0xE9) and 'É' (0xC9) are not folded.
        assert_eq!(ci_compare(&[0xe9u8], &[0xc9u8]), CI_NOT_EQUAL);
    }

    #[test]
    fn test_mixed_input_types() {
        let c = CString::new("Lump").expect("Failed to build CString");
        assert_eq!(ci_compare(c.as_c_str(), "LUMP"), CI_EQUAL);
        assert_eq!(ci_compare(&String::from("lump"), &Some("LuMp")), CI_EQUAL);
    }

    #[test]
    fn test_shared_prefix_beyond_bound_compares_equal() {
        let mut a = "x".repeat(CI_COMPARE_BOUND);
        let mut b = a.clone();
        a.push('a');
        b.push('b');
        assert_eq!(ci_compare(&a, &b), CI_EQUAL);

        a.truncate(CI_COMPARE_BOUND - 1);
        b.truncate(CI_COMPARE_BOUND - 1);
        a.push('a');
        b.push('b');
        assert_eq!(ci_compare(&a, &b), CI_NOT_EQUAL);
    }

    // =========================================================================
    // ci_compare_n()
    // =========================================================================

    #[test]
    fn test_bounded_prefix_equal() {
        assert_eq!(ci_compare_n("abcXXX", "abcYYY", 3), CI_EQUAL);
        assert_eq!(ci_compare_n("abcXXX", "ABCyyy", 3), CI_EQUAL);
    }

    #[test]
    fn test_bound_reaches_difference() {
        assert_eq!(ci_compare_n("abcXXX", "abcYYY", 4), CI_NOT_EQUAL);
    }

    #[test]
    fn test_zero_count_is_equal_for_non_empty() {
        assert_eq!(ci_compare_n("abc", "xyz", 0), CI_EQUAL);
    }

    #[test]
    fn test_zero_count_still_rejects_empty() {
        assert_eq!(ci_compare_n("", "xyz", 0), CI_NOT_EQUAL);
        assert_eq!(ci_compare_n(&None::<&str>, "xyz", 0), CI_NOT_EQUAL);
    }

    #[test]
    fn test_shorter_string_within_bound() {
        assert_eq!(ci_compare_n("ab", "abc", 3), CI_NOT_EQUAL);
        assert_eq!(ci_compare_n("ab", "abc", 2), CI_EQUAL);
    }

    #[test]
    fn test_equal_strings_with_large_bound() {
        assert_eq!(ci_compare_n("Wolf", "wOLF", usize::MAX), CI_EQUAL);
    }

    #[test]
    fn test_unterminated_slices() {
        let a: &[u8] = b"ABCD";
        let b: &[u8] = b"abcd";
        assert_eq!(ci_compare_n(a, b, 10), CI_EQUAL);
    }

    // =========================================================================
    // ci_eq() / ci_eq_n()
    // =========================================================================

    #[test]
    fn test_bool_forms() {
        assert!(ci_eq("SOD", "sod"));
        assert!(!ci_eq("SOD", "sdm"));
        assert!(!ci_eq("", ""));
        assert!(ci_eq_n("VGAHEAD", "vgagraph", 3));
        assert!(!ci_eq_n("VGAHEAD", "vgagraph", 4));
    }
}
