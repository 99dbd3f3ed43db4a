//! Tree structure management operations for BTreeIndex.
//!
//! This module contains tree-level queries: size, shape, order-derived
//! bounds and arena statistics.

use crate::arena::ArenaStats;
use crate::types::{BTreeIndex, NodeId};

// ============================================================================
// TREE STRUCTURE OPERATIONS
// ============================================================================

impl<K: Ord> BTreeIndex<K> {
    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len_recursive(self.root)
    }

    /// Recursively count keys below `id`.
    fn len_recursive(&self, id: NodeId) -> usize {
        let node = &self.arena[id];
        node.len()
            + node
                .children
                .iter()
                .map(|&child| self.len_recursive(child))
                .sum::<usize>()
    }

    /// Returns true if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.arena[self.root].is_empty()
    }

    /// Number of levels, 1 for a lone root leaf.
    pub fn height(&self) -> usize {
        let mut height = 1;
        let mut current = self.root;
        while let Some(&first) = self.arena[current].children.first() {
            current = first;
            height += 1;
        }
        height
    }

    /// Count the leaf and internal nodes reachable from the root.
    pub fn node_count(&self) -> (usize, usize) {
        self.count_nodes_recursive(self.root)
    }

    fn count_nodes_recursive(&self, id: NodeId) -> (usize, usize) {
        let node = &self.arena[id];
        if node.is_leaf {
            return (1, 0);
        }
        node.children
            .iter()
            .map(|&child| self.count_nodes_recursive(child))
            .fold((0, 1), |(leaves, branches), (l, b)| (leaves + l, branches + b))
    }

    /// Smallest key in the tree.
    pub fn first(&self) -> Option<&K> {
        self.arena[self.leftmost_leaf(self.root)].keys.first()
    }

    /// Largest key in the tree.
    pub fn last(&self) -> Option<&K> {
        self.arena[self.rightmost_leaf(self.root)].keys.last()
    }
}

impl<K> BTreeIndex<K> {
    /// Maximum number of children per node.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Most keys a node may hold between operations.
    pub fn max_keys(&self) -> usize {
        self.order - 1
    }

    /// Fewest keys a non-root node may hold between operations.
    pub fn min_keys(&self) -> usize {
        (self.order - 1) / 2
    }

    /// Get statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}
