use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use crate::geometry::Direction;
use crate::{Error, Result};

/// Integer 2D coordinate, `x` to the right and `y` downwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point2D { x, y }
    }

    pub fn manhattan(self, other: Point2D) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn manhattan_to_origin(self) -> i32 {
        self.manhattan(Self::ORIGIN)
    }

    pub fn euclidean(self, other: Point2D) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Orthogonal neighbours in the order up, right, down, left
    pub fn neighbors4(self) -> [Point2D; 4] {
        Direction::ALL.map(|d| d.step(self))
    }

    /// Orthogonal neighbours followed by the four diagonals
    pub fn neighbors8(self) -> [Point2D; 8] {
        let Point2D { x, y } = self;
        [
            Point2D::new(x, y - 1),
            Point2D::new(x + 1, y),
            Point2D::new(x, y + 1),
            Point2D::new(x - 1, y),
            Point2D::new(x - 1, y - 1),
            Point2D::new(x + 1, y - 1),
            Point2D::new(x - 1, y + 1),
            Point2D::new(x + 1, y + 1),
        ]
    }

    pub fn step(self, dir: Direction) -> Point2D {
        dir.step(self)
    }

    pub fn step_by(self, dir: Direction, steps: i32) -> Point2D {
        dir.step_by(self, steps)
    }

    /// True when the point lies in `[0, width) x [0, height)`
    pub fn in_bounds(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }

    /// True when the point lies in the inclusive box
    pub fn in_box(self, min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> bool {
        self.x >= min_x && self.x <= max_x && self.y >= min_y && self.y <= max_y
    }

    /// Clockwise quarter turn around the origin
    pub fn rotate_right90(self) -> Point2D {
        Point2D::new(-self.y, self.x)
    }

    /// Counter-clockwise quarter turn around the origin
    pub fn rotate_left90(self) -> Point2D {
        Point2D::new(self.y, -self.x)
    }

    pub fn rotate180(self) -> Point2D {
        -self
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point2D {
    type Output = Point2D;

    fn mul(self, scalar: i32) -> Point2D {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

// Row-major: compare rows first so sorted points read like the grid.
impl Ord for Point2D {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point2D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Point2D {
    type Err = Error;

    /// Parses `"x,y"`, `"x y"` or `"x, y"`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());
        let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
            return Err(Error::MalformedInput(format!("expected two coordinates in {s:?}")));
        };
        Ok(Point2D::new(x.parse()?, y.parse()?))
    }
}
