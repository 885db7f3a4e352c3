//! AoC 2025 - Puzzle-solving workbench
//!
//! This library collects the reusable pieces behind a set of daily puzzle solvers:
//! a generic graph-search toolkit (BFS, DFS, Dijkstra, A*, flood fill), 2D/3D
//! coordinates, a dense grid, closed integer ranges, memoization helpers, number
//! theory and linear-programming routines, string metrics and input parsing.
//!
//! Every traversal is single-threaded and allocates its own tables per call;
//! nodes are caller-defined values that only need `Clone + Eq + Hash`.

pub mod algorithm;
pub mod data_structures;
pub mod days;
pub mod geometry;
pub mod input;
pub mod math;
pub mod runner;
pub mod strings;

pub use algorithm::{
    astar, bfs, bfs_all, dfs_iterative, dfs_reachable, dijkstra, dijkstra_all,
    dijkstra_with_path, flood_fill, ShortestPath,
};
/// Re-export main types for convenient use
pub use data_structures::{Grid, MemoCache, Range};
pub use geometry::{Direction, Point2D, Point3D};

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid range: start {start} > end {end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid integer: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Unknown direction: {0}")]
    UnknownDirection(String),

    #[error("Strings must have equal length: {0} != {1}")]
    LengthMismatch(usize, usize),

    #[error("No solution exists")]
    NoSolution,

    #[error("No solver available for day {0}")]
    DayNotAvailable(u8),

    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
