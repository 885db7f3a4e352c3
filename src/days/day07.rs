//! Day 7: a tachyon beam falling from `S` through `^` splitters.

use std::collections::HashSet;

use super::Puzzle;
use crate::data_structures::MemoCache;
use crate::{Direction, Error, Grid, Point2D, Result};

const SOURCE: char = 'S';
const SPLITTER: char = '^';

pub struct Laboratories;

fn find_source(grid: &Grid<char>) -> Result<Point2D> {
    grid.find(&SOURCE)
        .ok_or_else(|| Error::MalformedInput("no beam source 'S'".to_string()))
}

/// Number of times a beam hits a splitter when coinciding beams merge
pub fn count_splits(grid: &Grid<char>) -> Result<usize> {
    let start = find_source(grid)?;
    let mut beams: HashSet<Point2D> = HashSet::from([start]);
    let mut splits = 0;

    for _ in (start.y + 1)..grid.height() as i32 {
        let mut next_beams = HashSet::new();
        for beam in beams.into_iter().map(|b| b.step(Direction::Down)) {
            if grid.get(beam) == Some(&SPLITTER) {
                splits += 1;
                next_beams.extend(
                    [beam.step(Direction::Left), beam.step(Direction::Right)]
                        .into_iter()
                        .filter(|&p| grid.in_bounds(p)),
                );
            } else {
                next_beams.insert(beam);
            }
        }
        beams = next_beams;
    }

    Ok(splits)
}

/// Timelines of a single particle leaving `pos`: each splitter forks it in two
pub fn count_timelines(grid: &Grid<char>, pos: Point2D, cache: &mut MemoCache<Point2D, u64>) -> u64 {
    if !grid.in_bounds(pos) {
        return 1;
    }
    if let Some(&known) = cache.get(&pos) {
        return known;
    }

    let next = pos.step(Direction::Down);
    if !grid.in_bounds(next) {
        return 1;
    }

    let timelines = if grid[next] == SPLITTER {
        count_timelines(grid, next.step(Direction::Left), cache)
            + count_timelines(grid, next.step(Direction::Right), cache)
    } else {
        count_timelines(grid, next, cache)
    };

    cache.insert(pos, timelines);
    timelines
}

impl Puzzle for Laboratories {
    fn day(&self) -> u8 {
        7
    }

    fn name(&self) -> &'static str {
        "Laboratories"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        let grid = Grid::parse(input);
        Ok(count_splits(&grid)? as i64)
    }

    fn part2(&self, input: &str) -> Result<i64> {
        let grid = Grid::parse(input);
        let start = find_source(&grid)?;
        let mut cache = MemoCache::new();
        let timelines = count_timelines(&grid, start, &mut cache);
        log::debug!("{} cached positions", cache.len());
        Ok(timelines as i64)
    }
}
