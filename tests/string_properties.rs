use strutil::{count_vowels, is_palindrome, reverse_string, VOWELS};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "hello",
    "racecar",
    "Programming",
    "A man a plan",
    "ÅngströM",
    "🦀 rust 🦀",
    "tab\tand\nnewline",
];

#[test]
fn test_reverse_twice_is_identity() {
    for s in SAMPLES {
        assert_eq!(reverse_string(&reverse_string(s)), *s);
    }
}

#[test]
fn test_palindrome_agrees_with_reverse() {
    for s in SAMPLES {
        assert_eq!(is_palindrome(s), *s == reverse_string(s), "input: {s:?}");
    }
}

#[test]
fn test_reversed_palindrome_is_palindrome() {
    for s in SAMPLES {
        let doubled = format!("{}{}", s, reverse_string(s));
        assert!(is_palindrome(&doubled));
    }
}

#[test]
fn test_vowel_count_is_stable_under_reversal() {
    for s in SAMPLES {
        assert_eq!(count_vowels(s), count_vowels(&reverse_string(s)));
        assert!(count_vowels(s) <= s.chars().count());
    }
}

#[test]
fn test_documented_values() {
    assert_eq!(reverse_string("hello"), "olleh");
    assert!(is_palindrome("racecar"));
    assert!(!is_palindrome("hello"));
    assert_eq!(count_vowels("Programming"), 3);
    assert_eq!(count_vowels("AEIOU"), 5);
    assert_eq!(count_vowels("aeiou"), 5);
    assert_eq!(VOWELS.len(), 10);
}
