use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier over a `BinaryHeap`
///
/// Entries are never updated in place; a vertex whose tentative distance improves
/// is pushed again and the caller skips the stale copy when it surfaces.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,

    /// Largest size reached since construction
    peak_len: usize,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            peak_len: 0,
        }
    }

    /// Creates a frontier seeded with a single entry
    pub fn seeded(vertex: V, priority: P) -> Self {
        let mut frontier = Frontier::new();
        frontier.push(vertex, priority);
        frontier
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn peak_len(&self) -> usize {
        self.peak_len
    }

    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes the entry with the smallest priority; ties go to the smaller vertex
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Frontier::new()
    }
}
