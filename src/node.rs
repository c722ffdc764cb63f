//! Arena-backed search tree nodes.

use crate::game::GameState;

/// Stable handle to a node: its index in the arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub state: GameState,
    pub parent: Option<NodeId>,
    /// Depth in the tree; every action costs 1.
    pub cost_to_node: f64,
}

/// Bump allocator for search nodes. Storage is reserved up front and
/// never grows, so the memory budget is a hard cap; handles stay valid
/// until the arena is dropped.
pub struct NodeArena {
    slots: Vec<SearchNode>,
    capacity: usize,
}

impl NodeArena {
    pub fn with_capacity(max_nodes: usize) -> NodeArena {
        NodeArena {
            slots: Vec::with_capacity(max_nodes),
            capacity: max_nodes,
        }
    }

    /// Allocate a child of `parent` holding a copy of `state`, or `None`
    /// when the arena is full.
    pub fn create(&mut self, parent: Option<NodeId>, state: &GameState) -> Option<NodeId> {
        if self.slots.len() == self.capacity {
            return None;
        }
        let cost_to_node = match parent {
            Some(p) => self.slots[p].cost_to_node + 1.0,
            None => 0.0,
        };
        let id = self.slots.len();
        self.slots.push(SearchNode {
            state: *state,
            parent,
            cost_to_node,
        });
        Some(id)
    }

    /// Free the most recent allocation. Only the last handle returned by
    /// `create` may be rolled back; earlier nodes are never touched.
    pub fn rollback_last(&mut self, id: NodeId) {
        assert_eq!(id + 1, self.slots.len());
        self.slots.pop();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::ops::Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.slots[id]
    }
}

impl std::ops::IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.slots[id]
    }
}
