use std::collections::HashMap;
use std::hash::Hash;

use crate::algorithm::traits::Cost;
use crate::data_structures::MinQueue;

/// A* search: Dijkstra ordered by accumulated cost plus `heuristic(node)`.
///
/// The result is optimal only if `heuristic` is admissible (never
/// overestimates the remaining cost). This is not checked: an
/// overestimating heuristic silently yields a suboptimal cost. A zero
/// heuristic makes this exactly [`dijkstra`](crate::algorithm::dijkstra).
pub fn astar<N, C, G, F, I, H>(
    start: N,
    mut is_goal: G,
    mut neighbors: F,
    mut heuristic: H,
) -> Option<C>
where
    N: Clone + Eq + Hash,
    C: Cost,
    G: FnMut(&N) -> bool,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
    H: FnMut(&N) -> C,
{
    let mut g_score: HashMap<N, C> = HashMap::new();
    // Entries carry their g-score; the priority is g + h
    let mut open: MinQueue<(N, C), C> = MinQueue::new();

    g_score.insert(start.clone(), C::zero());
    let h = heuristic(&start);
    open.push((start, C::zero()), h);

    let mut expanded = 0usize;
    while let Some(((node, cost), _)) = open.pop() {
        if is_goal(&node) {
            log::debug!("A* reached goal after expanding {} nodes", expanded);
            return Some(cost);
        }

        if g_score.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        expanded += 1;

        for (next, edge_cost) in neighbors(&node) {
            let tentative = cost + edge_cost;
            let improves = match g_score.get(&next) {
                None => true,
                Some(&current) => tentative < current,
            };

            if improves {
                g_score.insert(next.clone(), tentative);
                let priority = tentative + heuristic(&next);
                open.push((next, tentative), priority);
            }
        }
    }

    None
}
