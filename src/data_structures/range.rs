use std::fmt;

use crate::{Error, Result};

/// Closed integer interval `[start, end]`, always with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    start: i64,
    end: i64,
}

/// Result of [`Range::split_by`]: the overlap (if any) and the leftovers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSplit {
    pub inside: Option<Range>,
    pub outside: Vec<Range>,
}

impl RangeSplit {
    pub fn has_inside(&self) -> bool {
        self.inside.is_some()
    }
}

impl Range {
    /// Creates `[start, end]`, failing when `start > end`
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Range { start, end })
    }

    /// Creates the half-open range `[start, end)`
    pub fn exclusive(start: i64, end: i64) -> Result<Self> {
        Range::new(start, end - 1)
    }

    /// Creates the range of `length` values beginning at `start`
    pub fn of_length(start: i64, length: i64) -> Result<Self> {
        Range::new(start, start + length - 1)
    }

    // Both bounds are already ordered, so the result never needs validation.
    fn from_ordered(start: i64, end: i64) -> Self {
        debug_assert!(start <= end);
        Range { start, end }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered, never zero
    /// Number of covered values, saturating at `i64::MAX`
    pub fn len(&self) -> i64 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    /// Always false: a range covers at least its start
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.start && value <= self.end
    }

    /// True when `other` lies entirely within `self`
    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    pub fn intersection(&self, other: &Range) -> Option<Range> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start <= end).then(|| Range::from_ordered(start, end))
    }

    /// Union of two ranges that overlap or touch (`[1,3]` and `[4,6]`)
    pub fn union(&self, other: &Range) -> Option<Range> {
        let touching = self.end.checked_add(1) == Some(other.start)
            || other.end.checked_add(1) == Some(self.start);
        if self.overlaps(other) || touching {
            Some(Range::from_ordered(
                self.start.min(other.start),
                self.end.max(other.end),
            ))
        } else {
            None
        }
    }

    /// `self - other`: zero, one or two ranges, in ascending order
    pub fn subtract(&self, other: &Range) -> Vec<Range> {
        if !self.overlaps(other) {
            return vec![*self];
        }

        let mut result = Vec::with_capacity(2);
        if self.start < other.start {
            result.push(Range::from_ordered(self.start, other.start - 1));
        }
        if self.end > other.end {
            result.push(Range::from_ordered(other.end + 1, self.end));
        }
        result
    }

    pub fn shift(&self, delta: i64) -> Range {
        Range::from_ordered(self.start + delta, self.end + delta)
    }

    /// Splits into the part inside `other` and the parts outside it
    pub fn split_by(&self, other: &Range) -> RangeSplit {
        RangeSplit {
            inside: self.intersection(other),
            outside: self.subtract(other),
        }
    }

    /// Sorts by start and folds overlapping or adjacent ranges together.
    ///
    /// The result is sorted and pairwise disjoint, with at least one
    /// uncovered integer between consecutive ranges.
    pub fn merge(ranges: &[Range]) -> Vec<Range> {
        let mut sorted = ranges.to_vec();
        sorted.sort();

        let mut merged: Vec<Range> = Vec::with_capacity(sorted.len());
        for next in sorted {
            match merged.last_mut() {
                Some(current) => match current.union(&next) {
                    Some(union) => *current = union,
                    None => merged.push(next),
                },
                None => merged.push(next),
            }
        }
        merged
    }

    /// Number of integers covered by at least one range
    pub fn total_coverage(ranges: &[Range]) -> i64 {
        Range::merge(ranges)
            .iter()
            .fold(0i64, |total, r| total.saturating_add(r.len()))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.start, self.end)
    }
}
