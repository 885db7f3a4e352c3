use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// Minimum number of unit-cost hops from `start` to a node satisfying `is_goal`.
///
/// Nodes are marked visited when enqueued, so each one is expanded at most
/// once. Returns `None` when no goal is reachable.
pub fn bfs<N, G, F, I>(start: N, mut is_goal: G, mut neighbors: F) -> Option<usize>
where
    N: Clone + Eq + Hash,
    G: FnMut(&N) -> bool,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<(N, usize)> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back((start, 0));

    while let Some((node, hops)) = queue.pop_front() {
        if is_goal(&node) {
            log::debug!("BFS reached goal at depth {} ({} visited)", hops, visited.len());
            return Some(hops);
        }

        for next in neighbors(&node) {
            if !visited.contains(&next) {
                visited.insert(next.clone());
                queue.push_back((next, hops + 1));
            }
        }
    }

    None
}

/// Hop distance from `start` to every reachable node, `start` included at 0
pub fn bfs_all<N, F, I>(start: N, mut neighbors: F) -> HashMap<N, usize>
where
    N: Clone + Eq + Hash,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    let mut distances: HashMap<N, usize> = HashMap::new();
    let mut queue: VecDeque<(N, usize)> = VecDeque::new();

    distances.insert(start.clone(), 0);
    queue.push_back((start, 0));

    while let Some((node, hops)) = queue.pop_front() {
        for next in neighbors(&node) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), hops + 1);
                queue.push_back((next, hops + 1));
            }
        }
    }

    distances
}
