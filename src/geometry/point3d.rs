use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::geometry::Point2D;
use crate::{Error, Result};

/// Integer 3D coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3D {
    pub const ORIGIN: Point3D = Point3D { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Point3D { x, y, z }
    }

    pub fn manhattan(self, other: Point3D) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    pub fn manhattan_to_origin(self) -> i32 {
        self.manhattan(Self::ORIGIN)
    }

    /// Straight-line distance; the squares are summed as `i64`
    pub fn euclidean(self, other: Point3D) -> f64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        let dz = i64::from(self.z - other.z);
        ((dx * dx + dy * dy + dz * dz) as f64).sqrt()
    }

    /// Face-adjacent neighbours
    pub fn neighbors6(self) -> [Point3D; 6] {
        let Point3D { x, y, z } = self;
        [
            Point3D::new(x + 1, y, z),
            Point3D::new(x - 1, y, z),
            Point3D::new(x, y + 1, z),
            Point3D::new(x, y - 1, z),
            Point3D::new(x, y, z + 1),
            Point3D::new(x, y, z - 1),
        ]
    }

    /// Every point of the surrounding 3x3x3 cube except `self`
    pub fn neighbors26(self) -> Vec<Point3D> {
        let mut neighbors = Vec::with_capacity(26);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if dx != 0 || dy != 0 || dz != 0 {
                        neighbors.push(Point3D::new(self.x + dx, self.y + dy, self.z + dz));
                    }
                }
            }
        }
        neighbors
    }

    pub fn in_bounds(self, width: i32, height: i32, depth: i32) -> bool {
        self.x >= 0
            && self.x < width
            && self.y >= 0
            && self.y < height
            && self.z >= 0
            && self.z < depth
    }

    /// Drop the `z` component
    pub fn to_point2d(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}

impl Add for Point3D {
    type Output = Point3D;

    fn add(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3D {
    type Output = Point3D;

    fn sub(self, rhs: Point3D) -> Point3D {
        Point3D::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Point3D {
    type Output = Point3D;

    fn mul(self, scalar: i32) -> Point3D {
        Point3D::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Ord for Point3D {
    fn cmp(&self, other: &Self) -> Ordering {
        self.z
            .cmp(&other.z)
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point3D {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

impl FromStr for Point3D {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let coords = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .take(3)
            .map(str::parse)
            .collect::<std::result::Result<Vec<i32>, _>>()?;
        match coords[..] {
            [x, y, z] => Ok(Point3D::new(x, y, z)),
            _ => Err(Error::MalformedInput(format!("expected three coordinates in {s:?}"))),
        }
    }
}
