//! Day 5: fresh ingredient ID ranges.

use super::Puzzle;
use crate::input::{extract_int, split_by_empty_lines};
use crate::{Error, Range, Result};

pub struct Cafeteria;

/// The fresh ranges and the available ingredient IDs
pub struct Inventory {
    pub fresh: Vec<Range>,
    pub ingredients: Vec<i64>,
}

impl Inventory {
    pub fn parse(input: &str) -> Result<Self> {
        let groups = split_by_empty_lines(input);
        let ranges = groups
            .first()
            .ok_or_else(|| Error::MalformedInput("missing fresh ranges".to_string()))?;

        let fresh = ranges
            .iter()
            .map(|line| {
                let (start, end) = line
                    .split_once('-')
                    .ok_or_else(|| Error::MalformedInput(format!("expected a-b, got {line:?}")))?;
                Range::new(start.trim().parse()?, end.trim().parse()?)
            })
            .collect::<Result<Vec<_>>>()?;

        let ingredients = groups
            .get(1)
            .map(|lines| lines.iter().map(|line| extract_int(line)).collect::<Result<Vec<i64>>>())
            .transpose()?
            .unwrap_or_default();

        Ok(Inventory { fresh, ingredients })
    }

    pub fn is_fresh(&self, id: i64) -> bool {
        self.fresh.iter().any(|range| range.contains(id))
    }
}

impl Puzzle for Cafeteria {
    fn day(&self) -> u8 {
        5
    }

    fn name(&self) -> &'static str {
        "Cafeteria"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        let inventory = Inventory::parse(input)?;
        Ok(inventory
            .ingredients
            .iter()
            .filter(|&&id| inventory.is_fresh(id))
            .count() as i64)
    }

    fn part2(&self, input: &str) -> Result<i64> {
        let inventory = Inventory::parse(input)?;
        Ok(Range::total_coverage(&inventory.fresh))
    }
}
