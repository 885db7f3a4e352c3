//! Day 10: factory machines configured by pressing buttons.
//!
//! Each line reads `[.##.] (3) (1,3) (2) {3,5,4,7}`: a light pattern, the
//! buttons (each listing the lights or counters it affects) and the joltage
//! counter targets.

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, multispace0, multispace1, u32 as number};
use nom::combinator::{all_consuming, map, verify};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::IResult;

use super::Puzzle;
use crate::algorithm::bfs;
use crate::math::rref;
use crate::{Error, Result};

/// Search caps for the free variables left after row reduction in part 2.
///
/// A single free variable is always searched up to the largest counter
/// target; with more free variables each one is capped as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeVariableBounds {
    pub two_free: u32,
    pub many_free: u32,
}

impl Default for FreeVariableBounds {
    fn default() -> Self {
        Self {
            two_free: 150,
            many_free: 60,
        }
    }
}

impl FreeVariableBounds {
    pub fn with_two_free(mut self, cap: u32) -> Self {
        self.two_free = cap;
        self
    }

    pub fn with_many_free(mut self, cap: u32) -> Self {
        self.many_free = cap;
        self
    }

    /// Largest value tried for each free variable
    pub fn limit(&self, free_count: usize, max_target: u32) -> u32 {
        match free_count {
            0 | 1 => max_target,
            2 => max_target.min(self.two_free),
            _ => max_target.min(self.many_free),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Bit `i` is set when light `i` must end up on
    pub lights: u32,
    /// Indices toggled or incremented by each button
    pub buttons: Vec<Vec<u32>>,
    pub targets: Vec<u32>,
}

fn lights(input: &str) -> IResult<&str, u32> {
    map(
        delimited(
            char('['),
            verify(take_while1(|c: char| c == '.' || c == '#'), |pattern: &str| {
                pattern.len() <= 32
            }),
            char(']'),
        ),
        |pattern: &str| {
            pattern
                .chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .fold(0, |mask, (i, _)| mask | (1 << i))
        },
    )(input)
}

fn indices(input: &str) -> IResult<&str, Vec<u32>> {
    separated_list1(char(','), number)(input)
}

fn button(input: &str) -> IResult<&str, Vec<u32>> {
    delimited(char('('), indices, char(')'))(input)
}

fn joltages(input: &str) -> IResult<&str, Vec<u32>> {
    delimited(char('{'), indices, char('}'))(input)
}

fn machine(input: &str) -> IResult<&str, Machine> {
    map(
        tuple((
            lights,
            many0(preceded(multispace1, button)),
            preceded(multispace1, joltages),
        )),
        |(lights, buttons, targets)| Machine {
            lights,
            buttons,
            targets,
        },
    )(input)
}

impl Machine {
    pub fn parse(line: &str) -> Result<Self> {
        let (_, parsed) = all_consuming(terminated(machine, multispace0))(line.trim())
            .map_err(|e| Error::MalformedInput(format!("bad machine {line:?}: {e}")))?;

        let counters = parsed.targets.len().min(32);
        if parsed.buttons.iter().flatten().any(|&i| i as usize >= counters) {
            return Err(Error::MalformedInput(format!("button index out of range in {line:?}")));
        }
        Ok(parsed)
    }

    fn button_masks(&self) -> Vec<u32> {
        self.buttons
            .iter()
            .map(|button| button.iter().fold(0, |mask, &i| mask | (1 << i)))
            .collect()
    }

    /// Fewest presses turning the lights from all-off to the pattern
    pub fn min_light_presses(&self) -> Option<usize> {
        let masks = self.button_masks();
        let masks = &masks;
        let target = self.lights;
        bfs(0u32, |&state| state == target, move |&state: &u32| {
            masks.iter().map(move |&mask| state ^ mask)
        })
    }

    fn reaches_targets(&self, presses: &[i64]) -> bool {
        let mut counters = vec![0i64; self.targets.len()];
        for (button, &count) in self.buttons.iter().zip(presses) {
            for &i in button {
                counters[i as usize] += count;
            }
        }
        counters
            .iter()
            .zip(&self.targets)
            .all(|(&have, &want)| have == i64::from(want))
    }

    /// Fewest total presses making every counter hit its target exactly.
    ///
    /// Row-reduces `[A | b]` where column `j` marks the counters of button
    /// `j`, then enumerates the free variables within `bounds`; the pivot
    /// variables follow from each assignment.
    pub fn min_joltage_presses(&self, bounds: &FreeVariableBounds) -> Option<i64> {
        let buttons = self.buttons.len();
        let counters = self.targets.len();

        let mut augmented = vec![vec![0.0; buttons + 1]; counters];
        for (j, button) in self.buttons.iter().enumerate() {
            for &i in button {
                augmented[i as usize][j] = 1.0;
            }
        }
        for (row, &target) in augmented.iter_mut().zip(&self.targets) {
            row[buttons] = f64::from(target);
        }

        let reduced = rref(augmented, buttons);
        let free = reduced.free_columns(buttons);
        let max_target = self.targets.iter().copied().max().unwrap_or(0);
        let limit = bounds.limit(free.len(), max_target);
        log::trace!(
            "{} buttons, rank {}, {} free (up to {})",
            buttons,
            reduced.rank(),
            free.len(),
            limit
        );

        let mut best: Option<i64> = None;
        let mut free_values = vec![0u32; free.len()];
        loop {
            let mut presses = vec![0i64; buttons];
            for (&col, &value) in free.iter().zip(&free_values) {
                presses[col] = i64::from(value);
            }

            let mut valid = true;
            for (row, &pivot) in reduced.matrix.iter().zip(&reduced.pivot_cols) {
                let value = free
                    .iter()
                    .zip(&free_values)
                    .fold(row[buttons], |acc, (&col, &v)| acc - row[col] * f64::from(v));
                presses[pivot] = value.round() as i64;
                if presses[pivot] < 0 {
                    valid = false;
                    break;
                }
            }

            if valid && self.reaches_targets(&presses) {
                let total: i64 = presses.iter().sum();
                best = Some(best.map_or(total, |b| b.min(total)));
            }

            // Odometer step over the free values
            let mut idx = 0;
            while idx < free_values.len() {
                free_values[idx] += 1;
                if free_values[idx] <= limit {
                    break;
                }
                free_values[idx] = 0;
                idx += 1;
            }
            if idx == free_values.len() {
                break;
            }
        }
        best
    }
}

pub fn parse_machines(input: &str) -> Result<Vec<Machine>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Machine::parse)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct Factory {
    bounds: FreeVariableBounds,
}

impl Factory {
    pub fn new(bounds: FreeVariableBounds) -> Self {
        Self { bounds }
    }
}

impl Puzzle for Factory {
    fn day(&self) -> u8 {
        10
    }

    fn name(&self) -> &'static str {
        "Factory"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        parse_machines(input)?
            .iter()
            .map(|machine| machine.min_light_presses().map(|p| p as i64).ok_or(Error::NoSolution))
            .sum()
    }

    fn part2(&self, input: &str) -> Result<i64> {
        parse_machines(input)?
            .iter()
            .map(|machine| machine.min_joltage_presses(&self.bounds).ok_or(Error::NoSolution))
            .sum()
    }
}
