use aoc2025::{astar, bfs, bfs_all, dijkstra, dijkstra_all, dijkstra_with_path, Grid, Point2D};
use std::collections::HashMap;

// Test helper: an open grid where `walls` are blocked
fn create_test_grid(width: usize, height: usize, walls: &[Point2D]) -> Grid<bool> {
    let mut grid = Grid::filled(width, height, true);
    for &wall in walls {
        grid[wall] = false;
    }
    grid
}

fn open_neighbors(grid: &Grid<bool>, p: Point2D) -> Vec<Point2D> {
    grid.neighbors4(p).into_iter().filter(|&n| grid[n]).collect()
}

// Weighted 8-directional moves: straight 10, diagonal 14
fn weighted_moves(grid: &Grid<bool>, p: Point2D) -> Vec<(Point2D, u32)> {
    grid.neighbors8(p)
        .into_iter()
        .filter(|&n| grid[n])
        .map(|n| {
            let diagonal = n.x != p.x && n.y != p.y;
            (n, if diagonal { 14 } else { 10 })
        })
        .collect()
}

// Test that BFS on an open 5x5 grid returns the Manhattan distance
#[test]
fn test_bfs_open_grid_corner_to_corner() {
    let grid = create_test_grid(5, 5, &[]);
    let goal = Point2D::new(4, 4);

    let hops = bfs(Point2D::ORIGIN, |&p| p == goal, |&p| open_neighbors(&grid, p));

    assert_eq!(hops, Some(8));
}

// Test that the start node counts as a goal at distance zero
#[test]
fn test_start_is_goal() {
    let grid = create_test_grid(3, 3, &[]);

    assert_eq!(bfs(Point2D::ORIGIN, |_| true, |&p| open_neighbors(&grid, p)), Some(0));
    assert_eq!(
        dijkstra(Point2D::ORIGIN, |_| true, |&p| weighted_moves(&grid, p)),
        Some(0)
    );

    let result = dijkstra_with_path(Point2D::ORIGIN, |&p| p == Point2D::ORIGIN, |&p| {
        weighted_moves(&grid, p)
    })
    .expect("start is the goal");
    assert_eq!(result.cost, 0);
    assert_eq!(result.path, vec![Point2D::ORIGIN]);
    assert_eq!(result.hops(), 0);
}

// Test Dijkstra on a triangle where the direct edge is more expensive
#[test]
fn test_dijkstra_triangle_avoids_expensive_edge() {
    let edges: HashMap<char, Vec<(char, u32)>> = HashMap::from([
        ('a', vec![('b', 1), ('c', 10)]),
        ('b', vec![('a', 1), ('c', 1)]),
        ('c', vec![('a', 10), ('b', 1)]),
    ]);

    let cost = dijkstra('a', |&n| n == 'c', |n| edges[n].clone());

    assert_eq!(cost, Some(2));
}

// Test path finding with a wall that forces a detour
#[test]
fn test_path_finding_with_obstacles() {
    // Column 5 is blocked except for the bottom two rows
    let walls: Vec<Point2D> = (0..8).map(|y| Point2D::new(5, y)).collect();
    let grid = create_test_grid(10, 10, &walls);
    let goal = Point2D::new(9, 0);

    let result = dijkstra_with_path(Point2D::ORIGIN, |&p| p == goal, |&p| {
        open_neighbors(&grid, p).into_iter().map(|n| (n, 1u32))
    })
    .expect("a path around the wall exists");

    // Down to row 8, across, back up
    assert_eq!(result.cost, 9 + 8 + 8);
    assert_eq!(result.path.first(), Some(&Point2D::ORIGIN));
    assert_eq!(result.goal(), Some(&goal));
    assert_eq!(result.hops(), result.cost as usize);

    // Path should be continuous and avoid walls
    for pair in result.path.windows(2) {
        assert_eq!(pair[0].manhattan(pair[1]), 1, "Path should move one cell at a time");
        assert!(grid[pair[1]], "Path should not cross a wall");
    }
}

// Test that an enclosed goal is reported as unreachable
#[test]
fn test_unreachable_goal() {
    let walls = [Point2D::new(3, 4), Point2D::new(4, 3), Point2D::new(3, 3)];
    let grid = create_test_grid(5, 5, &walls);
    let goal = Point2D::new(4, 4);

    assert_eq!(bfs(Point2D::ORIGIN, |&p| p == goal, |&p| open_neighbors(&grid, p)), None);
    assert_eq!(
        dijkstra(Point2D::ORIGIN, |&p| p == goal, |&p| weighted_moves(&grid, p)),
        None
    );
    assert!(
        dijkstra_with_path(Point2D::ORIGIN, |&p| p == goal, |&p| weighted_moves(&grid, p))
            .is_none()
    );
}

// Test weighted diagonal moves against A* with an admissible octile heuristic
#[test]
fn test_astar_matches_dijkstra_with_diagonals() {
    let walls: Vec<Point2D> = (1..10).map(|x| Point2D::new(x, 5)).collect();
    let grid = create_test_grid(12, 12, &walls);
    let goal = Point2D::new(11, 11);

    let octile = |p: &Point2D| {
        let dx = (p.x - goal.x).unsigned_abs();
        let dy = (p.y - goal.y).unsigned_abs();
        10 * dx.max(dy) + 4 * dx.min(dy)
    };

    let expected = dijkstra(Point2D::ORIGIN, |&p| p == goal, |&p| weighted_moves(&grid, p));
    let found = astar(Point2D::ORIGIN, |&p| p == goal, |&p| weighted_moves(&grid, p), octile);

    assert!(expected.is_some());
    assert_eq!(found, expected);
}

// Test that the exhaustive tables agree with the single-target searches
#[test]
fn test_distance_tables() {
    let walls = [Point2D::new(1, 0), Point2D::new(1, 1), Point2D::new(1, 2)];
    let grid = create_test_grid(4, 4, &walls);

    let hops = bfs_all(Point2D::ORIGIN, |&p| open_neighbors(&grid, p));
    let costs = dijkstra_all(Point2D::ORIGIN, |&p| {
        open_neighbors(&grid, p).into_iter().map(|n| (n, 1u64))
    });

    assert_eq!(hops.len(), 16 - walls.len());
    assert_eq!(hops[&Point2D::ORIGIN], 0);
    assert_eq!(hops[&Point2D::new(2, 0)], 8);
    for (node, &hop) in &hops {
        assert_eq!(costs[node], hop as u64);
    }
    assert!(!hops.contains_key(&Point2D::new(1, 1)));
}
