use std::str::FromStr;

use crate::geometry::Point2D;
use crate::{Error, Result};

/// Cardinal direction on a grid where `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order starting from `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Horizontal component of a unit step
    pub fn dx(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            Direction::Up | Direction::Down => 0,
        }
    }

    /// Vertical component of a unit step
    pub fn dy(self) -> i32 {
        match self {
            Direction::Down => 1,
            Direction::Up => -1,
            Direction::Left | Direction::Right => 0,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// Arrow character used in puzzle inputs
    pub fn symbol(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Rotate 90 degrees clockwise
    pub fn turn_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Rotate 90 degrees counter-clockwise
    pub fn turn_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Move `p` one step in this direction
    pub fn step(self, p: Point2D) -> Point2D {
        self.step_by(p, 1)
    }

    /// Move `p` by `steps` in this direction
    pub fn step_by(self, p: Point2D, steps: i32) -> Point2D {
        Point2D::new(p.x + self.dx() * steps, p.y + self.dy() * steps)
    }

    /// Unit vector of this direction
    pub fn to_vector(self) -> Point2D {
        Point2D::new(self.dx(), self.dy())
    }

    /// Parse an arrow, a `URDL` letter or a compass letter
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            '^' | 'U' | 'N' => Ok(Direction::Up),
            '>' | 'R' | 'E' => Ok(Direction::Right),
            'v' | 'D' | 'S' => Ok(Direction::Down),
            '<' | 'L' | 'W' => Ok(Direction::Left),
            other => Err(Error::UnknownDirection(other.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "UP" | "U" | "NORTH" | "N" => Ok(Direction::Up),
            "RIGHT" | "R" | "EAST" | "E" => Ok(Direction::Right),
            "DOWN" | "D" | "SOUTH" | "S" => Ok(Direction::Down),
            "LEFT" | "L" | "WEST" | "W" => Ok(Direction::Left),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}
