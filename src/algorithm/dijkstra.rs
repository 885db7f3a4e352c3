use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::traits::{reconstruct_path, Cost, ShortestPath};
use crate::data_structures::MinQueue;

/// Minimum total cost from `start` to the first node satisfying `is_goal`.
///
/// `neighbors` yields `(target, cost)` edges on demand; costs must be
/// non-negative. Returns `None` when the reachable space is exhausted
/// without meeting the goal.
pub fn dijkstra<N, C, G, F, I>(start: N, mut is_goal: G, mut neighbors: F) -> Option<C>
where
    N: Clone + Eq + Hash,
    C: Cost,
    G: FnMut(&N) -> bool,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
{
    let mut distances: HashMap<N, C> = HashMap::new();
    let mut queue = MinQueue::new();

    distances.insert(start.clone(), C::zero());
    queue.push(start, C::zero());

    let mut settled = 0usize;
    while let Some((node, cost)) = queue.pop() {
        if is_goal(&node) {
            log::debug!("Dijkstra reached goal after settling {} nodes", settled);
            return Some(cost);
        }

        // Lazy deletion: a cheaper copy of this node was already expanded
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        settled += 1;

        for (next, edge_cost) in neighbors(&node) {
            let candidate = cost + edge_cost;
            let improves = match distances.get(&next) {
                None => true,
                Some(&current) => candidate < current,
            };

            if improves {
                distances.insert(next.clone(), candidate);
                queue.push(next, candidate);
            }
        }
    }

    log::debug!("Dijkstra exhausted {} nodes without reaching a goal", settled);
    None
}

/// Like [`dijkstra`], but also returns the node sequence from `start` to the goal
pub fn dijkstra_with_path<N, C, G, F, I>(
    start: N,
    mut is_goal: G,
    mut neighbors: F,
) -> Option<ShortestPath<N, C>>
where
    N: Clone + Eq + Hash + Debug,
    C: Cost,
    G: FnMut(&N) -> bool,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
{
    let mut distances: HashMap<N, C> = HashMap::new();
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut queue = MinQueue::new();

    distances.insert(start.clone(), C::zero());
    queue.push(start.clone(), C::zero());

    while let Some((node, cost)) = queue.pop() {
        if is_goal(&node) {
            let path = reconstruct_path(&predecessors, &start, node)?;
            return Some(ShortestPath { cost, path });
        }

        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for (next, edge_cost) in neighbors(&node) {
            let candidate = cost + edge_cost;
            let improves = match distances.get(&next) {
                None => true,
                Some(&current) => candidate < current,
            };

            if improves {
                distances.insert(next.clone(), candidate);
                predecessors.insert(next.clone(), node.clone());
                queue.push(next, candidate);
            }
        }
    }

    None
}

/// Shortest distance from `start` to every reachable node
pub fn dijkstra_all<N, C, F, I>(start: N, mut neighbors: F) -> HashMap<N, C>
where
    N: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
{
    let mut distances: HashMap<N, C> = HashMap::new();
    let mut queue = MinQueue::new();

    distances.insert(start.clone(), C::zero());
    queue.push(start, C::zero());

    while let Some((node, cost)) = queue.pop() {
        // If we've already found a shorter path to node, skip
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        // Relax all outgoing edges
        for (next, edge_cost) in neighbors(&node) {
            let candidate = cost + edge_cost;
            let should_update = match distances.get(&next) {
                None => true,
                Some(&current) => candidate < current,
            };

            if should_update {
                distances.insert(next.clone(), candidate);
                queue.push(next, candidate);
            }
        }
    }

    distances
}
