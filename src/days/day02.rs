//! Day 2: product IDs made of a repeated digit block.
//!
//! Invalid IDs are generated from their repeating block instead of scanning
//! every number of a range: the block is seeded from the first ID with a
//! suitable digit count and then incremented while the repeated ID stays in
//! the range.

use std::collections::HashSet;

use super::Puzzle;
use crate::{Error, Range, Result};

pub struct GiftShop;

pub fn parse_ranges(input: &str) -> Result<Vec<Range>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| {
            let (start, end) = field
                .split_once('-')
                .ok_or_else(|| Error::MalformedInput(format!("expected a-b, got {field:?}")))?;
            Range::new(start.trim().parse()?, end.trim().parse()?)
        })
        .collect()
}

fn digit_count(n: i64) -> u32 {
    if n == 0 {
        1
    } else {
        n.unsigned_abs().ilog10() + 1
    }
}

/// Smallest number `>= x` whose digit count is a multiple of `divisor`,
/// saturating at `i64::MAX`
pub fn next_number_with_digit_count(x: i64, divisor: u32) -> i64 {
    let digits = digit_count(x);
    let target = if x == 0 {
        divisor
    } else if digits % divisor == 0 {
        return x;
    } else {
        digits + (divisor - digits % divisor)
    };
    10i64.checked_pow(target - 1).unwrap_or(i64::MAX)
}

/// `pattern` written `repetitions` times in a row, `None` on overflow
pub fn repeat_pattern(pattern: i64, repetitions: u32) -> Option<i64> {
    let shift = 10i64.checked_pow(digit_count(pattern))?;
    (1..repetitions).try_fold(pattern, |id, _| id.checked_mul(shift)?.checked_add(pattern))
}

/// Every ID in `range` made of a block repeated exactly `repetitions` times
pub fn repeated_ids(range: &Range, repetitions: u32) -> Vec<i64> {
    let first = next_number_with_digit_count(range.start(), repetitions);
    if first > range.end() {
        return Vec::new();
    }

    let block_len = digit_count(first) / repetitions;
    if block_len == 0 {
        return Vec::new();
    }
    let mut pattern = first / 10i64.pow(digit_count(first) - block_len);

    let mut ids = Vec::new();
    while let Some(id) = repeat_pattern(pattern, repetitions) {
        if id > range.end() {
            break;
        }
        if id >= range.start() {
            ids.push(id);
        }
        pattern += 1;
    }
    ids
}

impl Puzzle for GiftShop {
    fn day(&self) -> u8 {
        2
    }

    fn name(&self) -> &'static str {
        "Gift Shop"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        Ok(parse_ranges(input)?
            .iter()
            .flat_map(|range| repeated_ids(range, 2))
            .sum())
    }

    fn part2(&self, input: &str) -> Result<i64> {
        let mut total = 0;
        for range in parse_ranges(input)? {
            // 1111 is both 11 twice and 1 four times
            let mut invalid = HashSet::new();
            for repetitions in 2..=digit_count(range.end()) {
                invalid.extend(repeated_ids(&range, repetitions));
            }
            log::trace!("{} holds {} invalid IDs", range, invalid.len());
            total += invalid.into_iter().sum::<i64>();
        }
        Ok(total)
    }
}
