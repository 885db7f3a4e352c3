use std::collections::{HashSet, VecDeque};

use crate::data_structures::Grid;
use crate::geometry::Point2D;

/// Maximal 4-connected region around `start` whose cells all satisfy `can_fill`.
///
/// Returns an empty set when `start` is outside the grid or fails the
/// predicate.
pub fn flood_fill<T, F>(grid: &Grid<T>, start: Point2D, mut can_fill: F) -> HashSet<Point2D>
where
    F: FnMut(&T) -> bool,
{
    let mut filled = HashSet::new();
    match grid.get(start) {
        Some(value) if can_fill(value) => {}
        _ => return filled,
    }

    let mut queue = VecDeque::new();
    filled.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in current.neighbors4() {
            if filled.contains(&next) {
                continue;
            }
            if grid.get(next).is_some_and(|value| can_fill(value)) {
                filled.insert(next);
                queue.push_back(next);
            }
        }
    }

    filled
}
