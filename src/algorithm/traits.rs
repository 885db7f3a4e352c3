use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

/// Accumulated path cost of the weighted searches.
///
/// Costs must be non-negative; Dijkstra and A* rely on it for optimality.
pub trait Cost: Copy + Ord + Zero + Debug {}

impl<T> Cost for T where T: Copy + Ord + Zero + Debug {}

/// Result of a path-reconstructing search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<N, C> {
    /// Total cost from the start to the last node of `path`
    pub cost: C,

    /// Nodes from the start to the goal, both included
    pub path: Vec<N>,
}

impl<N, C> ShortestPath<N, C> {
    /// The node that satisfied the goal predicate
    pub fn goal(&self) -> Option<&N> {
        self.path.last()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Walks `predecessors` back from `goal` to `start` and returns the path in
/// start-to-goal order.
///
/// Returns `None` if the chain breaks before reaching `start` or loops.
pub fn reconstruct_path<N>(predecessors: &HashMap<N, N>, start: &N, goal: N) -> Option<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    let mut path = vec![goal.clone()];
    let mut visited = HashSet::new();
    let mut current = goal;

    // Build path in reverse order
    while current != *start {
        if !visited.insert(current.clone()) {
            log::warn!("Cycle detected in predecessor chain at {:?}", current);
            return None;
        }

        current = predecessors.get(&current)?.clone();
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
