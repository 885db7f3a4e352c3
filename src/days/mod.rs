//! Daily puzzle solvers.
//!
//! Each solver takes the raw puzzle input and returns one integer answer per
//! part. Solvers are looked up by day number through [`puzzle`].

pub mod day01;
pub mod day02;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day09;
pub mod day10;

use crate::{Error, Result};

pub use day10::FreeVariableBounds;

/// A two-part daily puzzle
pub trait Puzzle {
    /// Day of the month this puzzle belongs to
    fn day(&self) -> u8;

    /// Short human-readable title
    fn name(&self) -> &'static str;

    fn part1(&self, input: &str) -> Result<i64>;

    fn part2(&self, input: &str) -> Result<i64>;

    /// Dispatches on a part number (1 or 2)
    fn solve(&self, part: u8, input: &str) -> Result<i64> {
        match part {
            1 => self.part1(input),
            2 => self.part2(input),
            other => Err(Error::MalformedInput(format!("no part {other}"))),
        }
    }
}

/// Days with a working solver, in ascending order
pub const AVAILABLE_DAYS: [u8; 8] = [1, 2, 4, 5, 6, 7, 9, 10];

/// The solver for `day`
pub fn puzzle(day: u8) -> Result<Box<dyn Puzzle>> {
    let solver: Box<dyn Puzzle> = match day {
        1 => Box::new(day01::SecretEntrance),
        2 => Box::new(day02::GiftShop),
        4 => Box::new(day04::PrintingDepartment),
        5 => Box::new(day05::Cafeteria),
        6 => Box::new(day06::TrashCompactor),
        7 => Box::new(day07::Laboratories),
        9 => Box::new(day09::MovieTheater),
        10 => Box::new(day10::Factory::default()),
        _ => return Err(Error::DayNotAvailable(day)),
    };
    Ok(solver)
}
