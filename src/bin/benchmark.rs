use std::time::{Duration, Instant};

use aoc2025::{astar, bfs, dijkstra, Grid, Point2D};
use rand::Rng;

// Random maze: each cell is a wall with probability `wall_ratio`, corners kept open
fn generate_obstacle_grid(size: usize, wall_ratio: f64) -> Grid<bool> {
    let mut grid = Grid::filled(size, size, true);
    let mut rng = rand::thread_rng();

    for p in grid.points().collect::<Vec<_>>() {
        if rng.gen_bool(wall_ratio) {
            grid[p] = false;
        }
    }

    let last = size as i32 - 1;
    grid[Point2D::ORIGIN] = true;
    grid[Point2D::new(last, last)] = true;
    grid
}

fn open_neighbors(grid: &Grid<bool>, p: Point2D) -> Vec<Point2D> {
    grid.neighbors4(p).into_iter().filter(|&n| grid[n]).collect()
}

// Times one search and reports the distance it found
fn benchmark_search<F>(name: &str, mut search: F) -> (Duration, Option<usize>)
where
    F: FnMut() -> Option<usize>,
{
    let start = Instant::now();
    let result = search();
    let duration = start.elapsed();

    match result {
        Some(distance) => println!("  - {:<9} distance {} in {:?}", name, distance, duration),
        None => println!("  - {:<9} unreachable in {:?}", name, duration),
    }
    (duration, result)
}

fn main() {
    env_logger::init();

    let grid_sizes = vec![100, 250, 500, 1_000, 2_000];
    let wall_ratio = 0.25;

    println!("=====================================================");
    println!("Benchmark: BFS vs Dijkstra vs A* on obstacle grids");
    println!("Wall ratio: {:.0}%", wall_ratio * 100.0);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &grid_sizes {
        println!("\nGenerating {}x{} grid...", size, size);
        let grid = generate_obstacle_grid(size, wall_ratio);
        let last = size as i32 - 1;
        let goal = Point2D::new(last, last);

        let (bfs_time, bfs_distance) = benchmark_search("BFS", || {
            bfs(Point2D::ORIGIN, |&p| p == goal, |&p| open_neighbors(&grid, p))
        });
        let (dijkstra_time, dijkstra_distance) = benchmark_search("Dijkstra", || {
            dijkstra(Point2D::ORIGIN, |&p| p == goal, |&p| {
                open_neighbors(&grid, p).into_iter().map(|n| (n, 1usize))
            })
        });
        let (astar_time, astar_distance) = benchmark_search("A*", || {
            astar(
                Point2D::ORIGIN,
                |&p| p == goal,
                |&p| open_neighbors(&grid, p).into_iter().map(|n| (n, 1usize)),
                |&p| p.manhattan(goal) as usize,
            )
        });

        if bfs_distance != dijkstra_distance || dijkstra_distance != astar_distance {
            println!(
                "  ! Disagreement: BFS {:?}, Dijkstra {:?}, A* {:?}",
                bfs_distance, dijkstra_distance, astar_distance
            );
        }

        results.push((size, bfs_time, dijkstra_time, astar_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<13} | {:<10} | {:<12}",
        "Size", "BFS (ms)", "Dijkstra (ms)", "A* (ms)", "A* speedup"
    );
    println!("-----------------------------------------------------");

    for (size, bfs_time, dijkstra_time, astar_time) in &results {
        let speedup = dijkstra_time.as_secs_f64() / astar_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<10} | {:<13} | {:<10} | {:<12.2}",
            size,
            bfs_time.as_millis(),
            dijkstra_time.as_millis(),
            astar_time.as_millis(),
            speedup
        );
    }
}
