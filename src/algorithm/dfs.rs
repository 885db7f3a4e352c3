use std::collections::HashSet;
use std::hash::Hash;

/// Every node reachable from `start`, found by recursive depth-first search.
///
/// Recursion depth grows with the longest simple path from `start`; prefer
/// [`dfs_iterative`] on graphs that may be deep.
pub fn dfs_reachable<N, F, I>(start: N, mut neighbors: F) -> HashSet<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited = HashSet::new();
    visit(start, &mut neighbors, &mut visited);
    visited
}

fn visit<N, F, I>(node: N, neighbors: &mut F, visited: &mut HashSet<N>)
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    if visited.contains(&node) {
        return;
    }
    visited.insert(node.clone());

    for next in neighbors(&node) {
        visit(next, neighbors, visited);
    }
}

/// Every node reachable from `start`, using an explicit stack
pub fn dfs_iterative<N, F, I>(start: N, mut neighbors: F) -> HashSet<N>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }

        for next in neighbors(&node) {
            if !visited.contains(&next) {
                stack.push(next);
            }
        }
        visited.insert(node);
    }

    visited
}
