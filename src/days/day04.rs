//! Day 4: paper rolls a forklift can reach.

use super::Puzzle;
use crate::{Grid, Point2D, Result};

const ROLL: char = '@';
const EMPTY: char = '.';

pub struct PrintingDepartment;

fn adjacent_rolls(grid: &Grid<char>, p: Point2D) -> usize {
    grid.neighbors8(p)
        .into_iter()
        .filter(|&n| grid[n] == ROLL)
        .count()
}

/// Rolls with fewer than four rolls among their eight neighbours
pub fn accessible_rolls(grid: &Grid<char>) -> Vec<Point2D> {
    grid.find_all(&ROLL)
        .into_iter()
        .filter(|&p| adjacent_rolls(grid, p) < 4)
        .collect()
}

impl Puzzle for PrintingDepartment {
    fn day(&self) -> u8 {
        4
    }

    fn name(&self) -> &'static str {
        "Printing Department"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        let grid = Grid::parse(input);
        Ok(accessible_rolls(&grid).len() as i64)
    }

    fn part2(&self, input: &str) -> Result<i64> {
        let mut grid = Grid::parse(input);
        let mut removed = 0;
        loop {
            let batch = accessible_rolls(&grid);
            if batch.is_empty() {
                break;
            }
            removed += batch.len() as i64;
            for p in batch {
                grid[p] = EMPTY;
            }
        }
        Ok(removed)
    }
}
