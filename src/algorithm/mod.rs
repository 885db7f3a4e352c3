pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod flood_fill;
pub mod traits;

pub use astar::astar;
pub use bfs::{bfs, bfs_all};
pub use dfs::{dfs_iterative, dfs_reachable};
pub use dijkstra::{dijkstra, dijkstra_all, dijkstra_with_path};
pub use flood_fill::flood_fill;
pub use traits::{reconstruct_path, Cost, ShortestPath};
