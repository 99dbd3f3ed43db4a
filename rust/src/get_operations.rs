//! GET operations for BTreeIndex.
//!
//! This module contains the read path: the descent primitive that insert
//! and delete are built on, the membership test, and node access helpers.

use crate::types::{BTreeIndex, Node, NodeId, SearchResult};

impl<K: Ord> BTreeIndex<K> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Check if `value` is present in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::BTreeIndex;
    ///
    /// let tree = BTreeIndex::build(3, [41, 44, 96, 46, 42, 20, 43]).unwrap();
    /// assert!(tree.search(&20));
    /// assert!(!tree.search(&23));
    /// ```
    pub fn search(&self, value: &K) -> bool {
        self.locate(value).is_found()
    }

    /// Descend from the root to the node holding `value`, or to the leaf
    /// where it would be inserted.
    pub fn locate(&self, value: &K) -> SearchResult {
        self.locate_from(self.root, value)
    }

    /// Descend from `node` to the node holding `value`, or to the leaf where
    /// it would be inserted. `node` may be any node of this tree.
    pub fn locate_from(&self, node: NodeId, value: &K) -> SearchResult {
        let mut current = node;
        loop {
            let node = &self.arena[current];
            match node.position(value) {
                Ok(index) => return SearchResult::Found { node: current, index },
                Err(index) if node.is_leaf => {
                    return SearchResult::NotFound { node: current, index }
                }
                Err(index) => current = node.children[index],
            }
        }
    }

    // ============================================================================
    // NODE ACCESS
    // ============================================================================

    /// Handle of the current root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Read access to a node, `None` if `id` is not a live node of this tree.
    pub fn node(&self, id: NodeId) -> Option<&Node<K>> {
        self.arena.get(id)
    }

    /// Walk parent links from `id` up to the root.
    pub(crate) fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.arena[current].parent() {
            current = parent;
        }
        current
    }

    /// Leftmost leaf of the subtree rooted at `id`.
    pub(crate) fn leftmost_leaf(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while !self.arena[current].is_leaf {
            current = self.arena[current].children[0];
        }
        current
    }

    /// Rightmost leaf of the subtree rooted at `id`.
    pub(crate) fn rightmost_leaf(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(&last) = self.arena[current].children.last() {
            current = last;
        }
        current
    }
}
