//! Day 9: the largest rectangle spanned by two red tiles.
//!
//! The red tiles, taken in order, are the corners of a rectilinear polygon.
//! For part 2 a rectangle only counts when its four corners lie inside or on
//! that polygon and no polygon edge passes through its interior.

use super::Puzzle;
use crate::{Point2D, Range, Result};

pub struct MovieTheater;

/// An axis-aligned polygon edge
#[derive(Debug, Clone)]
pub struct Segment {
    from: Point2D,
    to: Point2D,
    xs: Range,
    ys: Range,
}

impl Segment {
    pub fn new(from: Point2D, to: Point2D) -> Result<Self> {
        let xs = Range::new(i64::from(from.x.min(to.x)), i64::from(from.x.max(to.x)))?;
        let ys = Range::new(i64::from(from.y.min(to.y)), i64::from(from.y.max(to.y)))?;
        Ok(Segment { from, to, xs, ys })
    }

    pub fn is_vertical(&self) -> bool {
        self.from.x == self.to.x
    }

    pub fn is_horizontal(&self) -> bool {
        self.from.y == self.to.y
    }

    fn contains(&self, p: Point2D) -> bool {
        self.xs.contains(i64::from(p.x)) && self.ys.contains(i64::from(p.y))
    }

    /// Whether a ray cast from `p` towards +x crosses this edge
    fn crosses_ray_from(&self, p: Point2D) -> bool {
        let y = i64::from(p.y);
        self.is_vertical() && self.from.x > p.x && y > self.ys.start() && y <= self.ys.end()
    }

    /// Whether this edge enters the open rectangle `inner_x` x `inner_y`
    fn crosses_interior(&self, inner_x: &Range, inner_y: &Range) -> bool {
        if self.is_vertical() && inner_x.contains(i64::from(self.from.x)) {
            return self.ys.overlaps(inner_y);
        }
        if self.is_horizontal() && inner_y.contains(i64::from(self.from.y)) {
            return self.xs.overlaps(inner_x);
        }
        false
    }
}

pub fn parse_tiles(input: &str) -> Result<Vec<Point2D>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.parse())
        .collect()
}

/// Closed polygon through the tiles in input order
pub fn polygon_edges(tiles: &[Point2D]) -> Result<Vec<Segment>> {
    (0..tiles.len())
        .map(|i| Segment::new(tiles[i], tiles[(i + 1) % tiles.len()]))
        .collect()
}

/// Boundary test first, then ray casting for strictly interior points
pub fn is_inside_polygon(p: Point2D, edges: &[Segment]) -> bool {
    if edges.iter().any(|edge| edge.contains(p)) {
        return true;
    }
    edges.iter().filter(|edge| edge.crosses_ray_from(p)).count() % 2 == 1
}

/// Tiles covered by the rectangle with opposite corners `a` and `b`
pub fn rectangle_area(a: Point2D, b: Point2D) -> i64 {
    (i64::from((a.x - b.x).abs()) + 1) * (i64::from((a.y - b.y).abs()) + 1)
}

fn fits_in_polygon(a: Point2D, b: Point2D, edges: &[Segment]) -> bool {
    let corners = [a, b, Point2D::new(a.x, b.y), Point2D::new(b.x, a.y)];
    if !corners.iter().all(|&corner| is_inside_polygon(corner, edges)) {
        return false;
    }

    let (min_x, max_x) = (i64::from(a.x.min(b.x)), i64::from(a.x.max(b.x)));
    let (min_y, max_y) = (i64::from(a.y.min(b.y)), i64::from(a.y.max(b.y)));

    // Thinner than three tiles: no interior for an edge to cross
    let (Ok(inner_x), Ok(inner_y)) = (
        Range::new(min_x + 1, max_x - 1),
        Range::new(min_y + 1, max_y - 1),
    ) else {
        return true;
    };
    !edges
        .iter()
        .any(|edge| edge.crosses_interior(&inner_x, &inner_y))
}

impl Puzzle for MovieTheater {
    fn day(&self) -> u8 {
        9
    }

    fn name(&self) -> &'static str {
        "Movie Theater"
    }

    fn part1(&self, input: &str) -> Result<i64> {
        let tiles = parse_tiles(input)?;
        let mut best = 0;
        for (i, &a) in tiles.iter().enumerate() {
            for &b in &tiles[i + 1..] {
                best = best.max(rectangle_area(a, b));
            }
        }
        Ok(best)
    }

    fn part2(&self, input: &str) -> Result<i64> {
        let tiles = parse_tiles(input)?;
        let edges = polygon_edges(&tiles)?;
        let mut best = 0;
        for (i, &a) in tiles.iter().enumerate() {
            for &b in &tiles[i + 1..] {
                let area = rectangle_area(a, b);
                if area > best && fits_in_polygon(a, b, &edges) {
                    best = area;
                }
            }
        }
        Ok(best)
    }
}
