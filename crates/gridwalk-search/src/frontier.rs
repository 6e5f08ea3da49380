//! Expansion-order policies for pending nodes.
//!
//! The solver loop is the same for every strategy; only the [`Frontier`]
//! changes which node comes out next.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// A node waiting for expansion together with its priority.
///
/// `priority` is `g + h` and is only consulted by [`PriorityFrontier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub priority: f64,
}

/// Ordered collection of nodes pending expansion.
pub trait Frontier {
    /// Add a node.
    fn push(&mut self, entry: FrontierEntry);

    /// Remove and return the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every pending node, keeping the allocation.
    fn clear(&mut self);
}

/// First in, first out: breadth-first order.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry.node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Last in, first out: depth-first order.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.stack.push(entry.node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}

/// Heap entry ordered by `(priority, seq)`.
#[derive(Debug, Clone, Copy)]
struct Keyed {
    priority: f64,
    seq: u64,
    node: NodeId,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Keyed {}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // and the oldest entry among equal priorities.
        other
            .priority
            .total_cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest priority first; ties leave in insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<Keyed>,
    seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Keyed {
            priority: entry.priority,
            seq: self.seq,
            node: entry.node,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|k| k.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}
