//! Day 6: a worksheet of vertical arithmetic problems.

use super::Puzzle;
use crate::input::extract_ints;
use crate::{Error, Result};

pub struct TrashCompactor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Multiply,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub numbers: Vec<i64>,
    pub operator: Operator,
}

impl Problem {
    pub fn compute(&self) -> i64 {
        match self.operator {
            Operator::Add => self.numbers.iter().sum(),
            Operator::Multiply => self.numbers.iter().product(),
        }
    }
}

/// Number rows and the operators of the last line, blank lines dropped
fn split_sheet(input: &str) -> Result<(Vec<&str>, Vec<Operator>)> {
    let mut lines: Vec<&str> = input.lines().filter(|line| !line.trim().is_empty()).collect();
    let last = lines
        .pop()
        .ok_or_else(|| Error::MalformedInput("empty worksheet".to_string()))?;

    let operators = last
        .chars()
        .filter_map(|c| match c {
            '+' => Some(Operator::Add),
            '*' => Some(Operator::Multiply),
            _ => None,
        })
        .collect();
    Ok((lines, operators))
}

/// Problems read row by row: the n-th number of every row belongs to problem n
pub fn parse_rows(input: &str) -> Result<Vec<Problem>> {
    let (lines, operators) = split_sheet(input)?;
    let rows = lines
        .iter()
        .map(|line| extract_ints::<i64>(line))
        .collect::<Result<Vec<_>>>()?;

    operators
        .into_iter()
        .enumerate()
        .map(|(col, operator)| {
            let numbers = rows
                .iter()
                .map(|row| {
                    row.get(col).copied().ok_or_else(|| {
                        Error::MalformedInput(format!("row is missing column {col}"))
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Problem { numbers, operator })
        })
        .collect()
}

/// Problems read column by column: each character column, top to bottom, is
/// one number and fully blank columns separate the problems
pub fn parse_columns(input: &str) -> Result<Vec<Problem>> {
    let (lines, operators) = split_sheet(input)?;
    let rows: Vec<Vec<char>> = lines.iter().map(|line| line.chars().collect()).collect();
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let mut groups: Vec<Vec<i64>> = Vec::new();
    let mut current = Vec::new();
    for col in 0..width {
        let digits: String = rows
            .iter()
            .filter_map(|row| row.get(col))
            .filter(|c| !c.is_whitespace())
            .collect();

        if !digits.is_empty() {
            current.push(digits.parse()?);
        } else if !current.is_empty() {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }

    if groups.len() < operators.len() {
        return Err(Error::MalformedInput(format!(
            "{} operators for {} number columns",
            operators.len(),
            groups.len()
        )));
    }

    Ok(groups
        .into_iter()
        .zip(operators)
        .map(|(numbers, operator)| Problem { numbers, operator })
        .collect())
}

impl Puzzle for TrashCompactor {
    fn day(&self) -> u8 {
        6
    }

    fn name(&self) -> &'static str {
        "Trash Compactor"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        Ok(parse_rows(input)?.iter().map(Problem::compute).sum())
    }

    fn part2(&self, input: &str) -> Result<i64> {
        Ok(parse_columns(input)?.iter().map(Problem::compute).sum())
    }
}
