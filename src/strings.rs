//! String counting, transformation and distance helpers.
//!
//! Rotation, padding and slicing work on `char`s, not bytes.

use std::collections::HashMap;

use crate::{Error, Result};

pub fn count_char(s: &str, c: char) -> usize {
    s.chars().filter(|&ch| ch == c).count()
}

/// Non-overlapping occurrences of `sub`
pub fn count_substring(s: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    s.matches(sub).count()
}

/// Occurrences of `sub`, allowing matches to overlap (`"aa"` in `"aaa"` is 2)
pub fn count_overlapping(s: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return 0;
    }
    s.char_indices()
        .filter(|&(i, _)| s[i..].starts_with(sub))
        .count()
}

pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

pub fn rotate_left(s: &str, n: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if !chars.is_empty() {
        let len = chars.len();
        chars.rotate_left(n % len);
    }
    chars.into_iter().collect()
}

pub fn rotate_right(s: &str, n: usize) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if !chars.is_empty() {
        let len = chars.len();
        chars.rotate_right(n % len);
    }
    chars.into_iter().collect()
}

pub fn pad_left(s: &str, length: usize, pad: char) -> String {
    let missing = length.saturating_sub(s.chars().count());
    std::iter::repeat(pad).take(missing).chain(s.chars()).collect()
}

pub fn pad_right(s: &str, length: usize, pad: char) -> String {
    let missing = length.saturating_sub(s.chars().count());
    s.chars().chain(std::iter::repeat(pad).take(missing)).collect()
}

pub fn char_frequency(s: &str) -> HashMap<char, usize> {
    let mut freq = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Most frequent character; ties go to the smallest character
pub fn most_common(s: &str) -> Option<char> {
    char_frequency(s)
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(c, _)| c)
}

/// Least frequent character; ties go to the smallest character
pub fn least_common(s: &str) -> Option<char> {
    char_frequency(s)
        .into_iter()
        .min_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(c, _)| c)
}

pub fn all_unique(s: &str) -> bool {
    let mut seen = std::collections::HashSet::new();
    s.chars().all(|c| seen.insert(c))
}

pub fn is_palindrome(s: &str) -> bool {
    s.chars().eq(s.chars().rev())
}

/// Consecutive pieces of `size` characters; the last one may be shorter
pub fn chunks(s: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    chars.chunks(size.max(1)).map(|c| c.iter().collect()).collect()
}

/// Every substring of `size` characters, left to right
pub fn windows(s: &str, size: usize) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(size.max(1)).map(|w| w.iter().collect()).collect()
}

pub fn binary_to_u64(binary: &str) -> Result<u64> {
    Ok(u64::from_str_radix(binary, 2)?)
}

pub fn to_binary(value: u64) -> String {
    format!("{value:b}")
}

/// Binary representation left-padded with zeros to `bits` digits
pub fn to_binary_padded(value: u64, bits: usize) -> String {
    format!("{value:0bits$b}")
}

/// Number of positions at which two equal-length strings differ
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    let (len_a, len_b) = (a.chars().count(), b.chars().count());
    if len_a != len_b {
        return Err(Error::LengthMismatch(len_a, len_b));
    }
    Ok(a.chars().zip(b.chars()).filter(|(x, y)| x != y).count())
}

/// Minimum number of single-character insertions, deletions and substitutions
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    // Rolling single row of the classic DP table
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
