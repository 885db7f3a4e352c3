use std::fmt;
use std::ops::{Index, IndexMut};

use crate::geometry::Point2D;
use crate::{Error, Result};

/// Dense 2D array addressed by [`Point2D`], stored row by row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            cells: vec![value; width * height],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Creates a grid of default values
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, T::default())
    }

    /// Builds a grid from text lines, converting each character with `map`.
    ///
    /// The width is taken from the first line; shorter lines are padded
    /// with `T::default()` and longer ones are truncated.
    pub fn from_lines_with<S, F>(lines: &[S], mut map: F) -> Self
    where
        S: AsRef<str>,
        F: FnMut(char) -> T,
    {
        let height = lines.len();
        let width = lines.first().map_or(0, |line| line.as_ref().chars().count());
        let mut grid = Grid::new(width, height);
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.as_ref().chars().take(width).enumerate() {
                grid.cells[y * width + x] = map(c);
            }
        }
        grid
    }
}

impl Grid<char> {
    /// Character grid from text lines
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Grid::from_lines_with(lines, |c| c)
    }

    /// Character grid from a whole input, one row per non-empty line
    pub fn parse(input: &str) -> Self {
        let lines: Vec<&str> = input.lines().filter(|line| !line.is_empty()).collect();
        Grid::from_lines(&lines)
    }
}

impl Grid<u32> {
    /// Grid of single decimal digits
    pub fn from_digits<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        let width = lines.first().map_or(0, |line| line.as_ref().chars().count());
        let mut grid = Grid::new(width, lines.len());
        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.as_ref().chars().take(width).enumerate() {
                grid.cells[y * width + x] = c.to_digit(10).ok_or_else(|| {
                    Error::MalformedInput(format!("non-digit {c:?} at ({x},{y})"))
                })?;
            }
        }
        Ok(grid)
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn idx(&self, p: Point2D) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    fn point(&self, idx: usize) -> Point2D {
        Point2D::new((idx % self.width) as i32, (idx / self.width) as i32)
    }

    pub fn in_bounds(&self, p: Point2D) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    pub fn get(&self, p: Point2D) -> Option<&T> {
        self.idx(p).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, p: Point2D) -> Option<&mut T> {
        self.idx(p).map(move |i| &mut self.cells[i])
    }

    /// Value at `p`, or `default` outside the grid
    pub fn get_or(&self, p: Point2D, default: T) -> T
    where
        T: Clone,
    {
        self.get(p).cloned().unwrap_or(default)
    }

    /// Stores `value` at `p`; returns false (and drops the value) outside the grid
    pub fn set(&mut self, p: Point2D, value: T) -> bool {
        match self.get_mut(p) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// All coordinates in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        (0..self.cells.len()).map(move |i| self.point(i))
    }

    /// Coordinates paired with their cell values, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Point2D, &T)> + '_ {
        self.cells.iter().enumerate().map(move |(i, v)| (self.point(i), v))
    }

    /// First cell (row-major) satisfying `predicate`
    pub fn find_by<F>(&self, mut predicate: F) -> Option<Point2D>
    where
        F: FnMut(&T) -> bool,
    {
        self.cells.iter().position(|v| predicate(v)).map(|i| self.point(i))
    }

    pub fn find_all_by<F>(&self, mut predicate: F) -> Vec<Point2D>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|(_, v)| predicate(v))
            .map(|(p, _)| p)
            .collect()
    }

    pub fn count_by<F>(&self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.cells.iter().filter(|v| predicate(v)).count()
    }

    /// Orthogonal neighbours of `p` that lie inside the grid
    pub fn neighbors4(&self, p: Point2D) -> Vec<Point2D> {
        p.neighbors4()
            .into_iter()
            .filter(|&n| self.in_bounds(n))
            .collect()
    }

    /// All eight neighbours of `p` that lie inside the grid
    pub fn neighbors8(&self, p: Point2D) -> Vec<Point2D> {
        p.neighbors8()
            .into_iter()
            .filter(|&n| self.in_bounds(n))
            .collect()
    }
}

impl<T: PartialEq> Grid<T> {
    pub fn find(&self, value: &T) -> Option<Point2D> {
        self.find_by(|v| v == value)
    }

    pub fn find_all(&self, value: &T) -> Vec<Point2D> {
        self.find_all_by(|v| v == value)
    }

    pub fn count(&self, value: &T) -> usize {
        self.count_by(|v| v == value)
    }
}

impl<T> Index<Point2D> for Grid<T> {
    type Output = T;

    fn index(&self, p: Point2D) -> &T {
        match self.idx(p) {
            Some(i) => &self.cells[i],
            None => panic!("{p} is outside a {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> IndexMut<Point2D> for Grid<T> {
    fn index_mut(&mut self, p: Point2D) -> &mut T {
        match self.idx(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("{p} is outside a {}x{} grid", self.width, self.height),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
