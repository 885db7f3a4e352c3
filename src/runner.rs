//! Runs a day's solver against its input and times each part.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::days::{self, day10, FreeVariableBounds, Puzzle};
use crate::input::{day_input_path, read_all};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What to run and where its input lives
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub day: u8,
    /// Run only this part; both parts when `None`
    pub part: Option<u8>,
    pub input_dir: PathBuf,
    /// Overrides the path derived from `input_dir` and `day`
    pub input: Option<PathBuf>,
    /// Read `input_dayNN_example.txt` instead of the real input
    pub example: bool,
    pub format: OutputFormat,
    pub day10_bounds: FreeVariableBounds,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            day: 1,
            part: None,
            input_dir: PathBuf::from("input"),
            input: None,
            example: false,
            format: OutputFormat::Text,
            day10_bounds: FreeVariableBounds::default(),
        }
    }
}

impl RunConfig {
    pub fn new(day: u8) -> Self {
        Self {
            day,
            ..Default::default()
        }
    }

    pub fn with_part(mut self, part: u8) -> Self {
        self.part = Some(part);
        self
    }

    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    pub fn with_example(mut self, example: bool) -> Self {
        self.example = example;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_day10_bounds(mut self, bounds: FreeVariableBounds) -> Self {
        self.day10_bounds = bounds;
        self
    }

    pub fn input_path(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| day_input_path(&self.input_dir, self.day, self.example))
    }

    fn parts(&self) -> Result<Vec<u8>> {
        match self.part {
            None => Ok(vec![1, 2]),
            Some(part @ (1 | 2)) => Ok(vec![part]),
            Some(other) => Err(Error::MalformedInput(format!("no part {other}"))),
        }
    }

    fn solver(&self) -> Result<Box<dyn Puzzle>> {
        if self.day == 10 {
            return Ok(Box::new(day10::Factory::new(self.day10_bounds)));
        }
        days::puzzle(self.day)
    }
}

/// The answer to one part and how long it took
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartReport {
    pub day: u8,
    pub part: u8,
    pub answer: i64,
    pub elapsed_ms: u64,
}

impl fmt::Display for PartReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Result part {} : {} in {}ms",
            self.part, self.answer, self.elapsed_ms
        )
    }
}

/// Solves the requested parts on already loaded input
pub fn run_on(config: &RunConfig, input: &str) -> Result<Vec<PartReport>> {
    let solver = config.solver()?;
    log::info!("Day {}: {}", solver.day(), solver.name());

    let mut reports = Vec::new();
    for part in config.parts()? {
        let start = Instant::now();
        let answer = solver.solve(part, input)?;
        let elapsed = start.elapsed();
        log::info!("Day {} part {} solved in {:?}", config.day, part, elapsed);

        reports.push(PartReport {
            day: config.day,
            part,
            answer,
            elapsed_ms: elapsed.as_millis() as u64,
        });
    }
    Ok(reports)
}

/// Reads the day's input once and solves the requested parts
pub fn run(config: &RunConfig) -> Result<Vec<PartReport>> {
    // Unknown days fail before touching the filesystem
    config.solver()?;

    let path = config.input_path();
    log::debug!("Reading {}", path.display());
    let input = read_all(&path)?;
    run_on(config, &input)
}
