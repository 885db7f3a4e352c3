//! Reading puzzle inputs and pulling numbers out of free-form lines.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use nom::branch::alt;
use nom::character::complete::{anychar, char, digit1};
use nom::combinator::{map, opt, recognize};
use nom::multi::many0;
use nom::sequence::pair;
use nom::IResult;

use crate::{Error, Result};

/// Reads a whole file into a string
pub fn read_all(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a file as a list of lines
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(read_all(path)?.lines().map(str::to_owned).collect())
}

/// `dir/input_dayNN.txt`, or `dir/input_dayNN_example.txt` for the worked example
pub fn day_input_path(dir: impl AsRef<Path>, day: u8, example: bool) -> PathBuf {
    let suffix = if example { "_example" } else { "" };
    dir.as_ref().join(format!("input_day{day:02}{suffix}.txt"))
}

/// Groups of consecutive non-empty lines, separated by one or more empty lines
pub fn split_by_empty_lines(input: &str) -> Vec<Vec<&str>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                groups.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// An optionally negative run of decimal digits
fn signed_integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(char('-')), digit1))(input)
}

/// Integer tokens interleaved with arbitrary characters
fn integer_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    map(
        many0(alt((map(signed_integer, Some), map(anychar, |_| None)))),
        |tokens| tokens.into_iter().flatten().collect(),
    )(input)
}

/// Every `-?\d+` token of `line`, in order
pub fn extract_ints<T>(line: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let (_, tokens) = integer_tokens(line)
        .map_err(|e| Error::MalformedInput(format!("cannot scan {line:?}: {e}")))?;
    tokens
        .into_iter()
        .map(|token| token.parse::<T>().map_err(Error::from))
        .collect()
}

/// The first integer of `line`
pub fn extract_int<T>(line: &str) -> Result<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    extract_ints(line)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::MalformedInput(format!("no integer in {line:?}")))
}

/// Integers separated by `delimiter`, ignoring blank fields
pub fn parse_delimited<T>(line: &str, delimiter: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    line.split(delimiter)
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| field.parse::<T>().map_err(Error::from))
        .collect()
}
