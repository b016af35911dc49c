//! Elementary string utilities.
//!
//! All functions are total over `&str` and free of side effects.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The vowels recognised by [`count_vowels`], in both cases.
pub static VOWELS: LazyLock<HashSet<char>> =
    LazyLock::new(|| "aeiouAEIOU".chars().collect());

// #region reverse
/// Returns `s` with its characters in reverse order.
pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}
// #endregion reverse

/// Exact, case-sensitive comparison of `s` with its reversal.
pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

pub fn count_vowels(s: &str) -> usize {
    s.chars().filter(|c| VOWELS.contains(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_set() {
        assert_eq!(VOWELS.len(), 10);
        for c in "aeiouAEIOU".chars() {
            assert!(VOWELS.contains(&c));
        }
        assert!(!VOWELS.contains(&'y'));
    }

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("a"), "a");
        assert_eq!(reverse_string("héllo wörld"), "dlröw olléh");
    }

    #[test]
    fn test_reverse_is_involution() {
        for s in ["", "a", "ab", "Programming", "racecar", "日本語", "  spaced  "] {
            assert_eq!(reverse_string(&reverse_string(s)), s);
        }
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("a"));
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("hello"));
        // case and whitespace are significant
        assert!(!is_palindrome("Racecar"));
        assert!(!is_palindrome("race car"));
    }

    #[test]
    fn test_is_palindrome_matches_reverse() {
        for s in ["", "abba", "abca", "Aa", "été", "noon ", "x"] {
            assert_eq!(is_palindrome(s), s == reverse_string(s));
        }
    }

    #[test]
    fn test_count_vowels() {
        assert_eq!(count_vowels(""), 0);
        assert_eq!(count_vowels("Programming"), 3);
        assert_eq!(count_vowels("AEIOU"), 5);
        assert_eq!(count_vowels("aeiou"), 5);
        assert_eq!(count_vowels("rhythm"), 0);
        assert_eq!(count_vowels("éa"), 1);
    }
}
