//! Day 1: a safe dial numbered 0 to 99, turned by `L`/`R` rotations.

use super::Puzzle;
use crate::{Error, Result};

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

pub struct SecretEntrance;

/// A single dial rotation; negative steps turn left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(pub i64);

impl Rotation {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut chars = line.chars();
        let sign = match chars.next() {
            Some('L') => -1,
            Some('R') => 1,
            _ => return Err(Error::MalformedInput(format!("bad rotation {line:?}"))),
        };
        let steps: i64 = chars.as_str().parse()?;
        Ok(Rotation(sign * steps))
    }

    /// Times the dial points at 0 during this rotation, landing included
    pub fn zero_clicks(self, position: i64) -> i64 {
        let steps = self.0.abs();
        if self.0 >= 0 {
            (position + steps) / DIAL_SIZE
        } else if position == 0 {
            steps / DIAL_SIZE
        } else if steps >= position {
            (steps - position) / DIAL_SIZE + 1
        } else {
            0
        }
    }
}

pub fn parse_rotations(input: &str) -> Result<Vec<Rotation>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Rotation::parse)
        .collect()
}

impl Puzzle for SecretEntrance {
    fn day(&self) -> u8 {
        1
    }

    fn name(&self) -> &'static str {
        "Secret Entrance"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        let mut position = START;
        let mut zeros = 0;
        for rotation in parse_rotations(input)? {
            position = (position + rotation.0).rem_euclid(DIAL_SIZE);
            if position == 0 {
                zeros += 1;
            }
        }
        Ok(zeros)
    }

    fn part2(&self, input: &str) -> Result<i64> {
        let mut position = START;
        let mut zeros = 0;
        for rotation in parse_rotations(input)? {
            zeros += rotation.zero_clicks(position);
            position = (position + rotation.0).rem_euclid(DIAL_SIZE);
            log::trace!("{:?} -> {} ({} zeros so far)", rotation, position, zeros);
        }
        Ok(zeros)
    }
}
