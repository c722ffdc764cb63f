//! Frontier disciplines for the search driver.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;

/// The capability set the driver needs from a frontier. Heap, FIFO and
/// future cost-biased variants swap without touching the search loop.
pub trait Frontier {
    fn push(&mut self, id: NodeId, cost: f64);
    fn pop(&mut self) -> Option<NodeId>;
    fn peek(&self) -> Option<NodeId>;
    fn is_empty(&self) -> bool;
    fn len(&self) -> usize;
    /// Total ever enqueued, not the current size.
    fn total_enqueued(&self) -> usize;
}

struct HeapEntry {
    cost: f64,
    id: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &HeapEntry) -> bool {
        self.cost == other.cost && self.id == other.id
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &HeapEntry) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed so the std max-heap pops the cheapest entry; equal costs fall
// back to allocation order, which keeps the search stable.
impl Ord for HeapEntry {
    fn cmp(&self, other: &HeapEntry) -> Ordering {
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Binary min-heap over `(cost, id)`. With unit action costs the cost is
/// tree depth and this degenerates to a stable level-order scheduler.
pub struct HeapFrontier {
    heap: BinaryHeap<HeapEntry>,
    total: usize,
}

impl HeapFrontier {
    pub fn with_capacity(max_nodes: usize) -> HeapFrontier {
        HeapFrontier {
            heap: BinaryHeap::with_capacity(max_nodes),
            total: 0,
        }
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, id: NodeId, cost: f64) {
        self.total += 1;
        self.heap.push(HeapEntry { cost, id });
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|entry| entry.id)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn total_enqueued(&self) -> usize {
        self.total
    }
}

/// First-in-first-out frontier: plain breadth-first expansion.
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
    total: usize,
}

impl FifoFrontier {
    pub fn new() -> FifoFrontier {
        FifoFrontier {
            queue: VecDeque::new(),
            total: 0,
        }
    }

    pub fn with_capacity(max_nodes: usize) -> FifoFrontier {
        FifoFrontier {
            queue: VecDeque::with_capacity(max_nodes),
            total: 0,
        }
    }
}

impl Default for FifoFrontier {
    fn default() -> FifoFrontier {
        FifoFrontier::new()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, id: NodeId, _cost: f64) {
        self.total += 1;
        self.queue.push_back(id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn peek(&self) -> Option<NodeId> {
        self.queue.front().copied()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn total_enqueued(&self) -> usize {
        self.total
    }
}
