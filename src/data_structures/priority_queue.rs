use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Heap entry ordered by priority only, so the stored value needs no ordering
#[derive(Debug)]
struct Entry<V, P> {
    priority: P,
    value: V,
}

impl<V, P: Ord> PartialEq for Entry<V, P> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<V, P: Ord> Eq for Entry<V, P> {}

impl<V, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap and we pop the smallest priority first.
        other.priority.cmp(&self.priority)
    }
}

impl<V, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue over a BinaryHeap for the weighted searches
///
/// Duplicate values are allowed: searches push a node again when its cost
/// improves and discard the stale copy when it is popped.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Entry<V, P>>,
}

impl<V, P> MinQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Pushes a value with the given priority
    pub fn push(&mut self, value: V, priority: P) {
        self.heap.push(Entry { priority, value });
    }

    /// Removes the value with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Entry { priority, value }| (value, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
