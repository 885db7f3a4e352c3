use aoc2025::strings::*;
use aoc2025::Error;

#[test]
fn test_counting() {
    assert_eq!(count_char("banana", 'a'), 3);
    assert_eq!(count_substring("aaaa", "aa"), 2);
    assert_eq!(count_overlapping("aaaa", "aa"), 3);
    assert_eq!(count_overlapping("abc", ""), 0);
    assert_eq!(count_substring("abcabc", "bc"), 2);
}

#[test]
fn test_transformations() {
    assert_eq!(reverse("héllo"), "olléh");
    assert_eq!(rotate_left("abcde", 2), "cdeab");
    assert_eq!(rotate_right("abcde", 7), "deabc");
    assert_eq!(rotate_left("", 3), "");
    assert_eq!(pad_left("42", 5, '0'), "00042");
    assert_eq!(pad_right("ab", 4, '.'), "ab..");
    assert_eq!(pad_left("toolong", 3, ' '), "toolong");
}

// Test frequency helpers and their tie-breaking
#[test]
fn test_frequencies() {
    let freq = char_frequency("hello");
    assert_eq!(freq[&'l'], 2);
    assert_eq!(freq.len(), 4);

    assert_eq!(most_common("hello"), Some('l'));
    assert_eq!(most_common("abab"), Some('a'));
    assert_eq!(least_common("aabbc"), Some('c'));
    assert_eq!(least_common("ba"), Some('a'));
    assert_eq!(most_common(""), None);
}

#[test]
fn test_predicates() {
    assert!(all_unique("abcd"));
    assert!(!all_unique("abca"));
    assert!(is_palindrome("racecar"));
    assert!(is_palindrome(""));
    assert!(!is_palindrome("ab"));
}

#[test]
fn test_chunks_and_windows() {
    assert_eq!(chunks("abcdefg", 3), vec!["abc", "def", "g"]);
    assert_eq!(windows("abcd", 2), vec!["ab", "bc", "cd"]);
    assert!(windows("ab", 3).is_empty());
}

#[test]
fn test_binary() {
    assert_eq!(binary_to_u64("1011").unwrap(), 11);
    assert!(matches!(binary_to_u64("102"), Err(Error::ParseInt(_))));
    assert_eq!(to_binary(10), "1010");
    assert_eq!(to_binary_padded(5, 8), "00000101");
}

// Test edit distances
#[test]
fn test_distances() {
    assert_eq!(hamming_distance("karolin", "kathrin").unwrap(), 3);
    assert!(matches!(hamming_distance("abc", "ab"), Err(Error::LengthMismatch(3, 2))));
    assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    assert_eq!(levenshtein_distance("", "abc"), 3);
    assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
    assert_eq!(levenshtein_distance("same", "same"), 0);
}
