//! DELETE operations for BTreeIndex.
//!
//! This module contains key removal and the rebalance cascade that shrinks
//! the tree. A key in an internal node is replaced by its in-order
//! successor so that every removal happens in a leaf. An underflowing node
//! then either merges with a sibling at minimum occupancy (which may leave
//! the parent underflowing, so the cascade moves up) or borrows one key
//! through the parent from a sibling with a surplus (which ends it).

use tracing::{debug, trace};

use crate::error::{BTreeError, BTreeResultExt, ModifyResult};
use crate::types::{BTreeIndex, NodeId, SearchResult, NULL_NODE};

impl<K: Ord> BTreeIndex<K> {
    /// Remove `value` from the tree.
    ///
    /// Returns `true` if the value was present. A miss leaves the tree
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::BTreeIndex;
    ///
    /// let mut tree = BTreeIndex::build(3, [41, 44, 96, 46, 42, 20, 43]).unwrap();
    /// assert!(tree.delete(&44));
    /// assert!(!tree.search(&44));
    /// assert!(!tree.delete(&7));
    /// ```
    pub fn delete(&mut self, value: &K) -> bool {
        let (node, index) = match self.locate(value) {
            SearchResult::Found { node, index } => (node, index),
            SearchResult::NotFound { node, .. } => {
                trace!(node, "delete: key not present");
                return false;
            }
        };

        trace!(node, index, "delete");
        let leaf = if self.arena[node].is_leaf {
            self.arena[node].keys.remove(index);
            node
        } else {
            self.replace_with_successor(node, index)
        };

        if self.arena[leaf].is_underfull(self.min_keys()) {
            self.root = self.rebalance(leaf);
        }
        true
    }

    /// Delete with invariant validation before and after the mutation.
    pub fn try_delete(&mut self, value: &K) -> ModifyResult<()> {
        self.check_invariants_detailed().with_operation("delete")?;

        if !self.delete(value) {
            return Err(BTreeError::KeyNotFound);
        }

        self.check_invariants_detailed().with_operation("delete")?;
        Ok(())
    }

    // ============================================================================
    // HELPERS FOR DELETE OPERATIONS
    // ============================================================================

    /// Overwrite `keys[index]` of internal node `node` with its in-order
    /// successor, taken from the front of the leftmost leaf of
    /// `children[index + 1]`. Returns that leaf.
    fn replace_with_successor(&mut self, node: NodeId, index: usize) -> NodeId {
        let leaf = self.leftmost_leaf(self.arena[node].children[index + 1]);
        let successor = self.arena[leaf].keys.remove(0);
        self.arena[node].keys[index] = successor;
        leaf
    }

    /// Restore occupancy starting from the underflowing node `id`, cascading
    /// up through parents emptied by merges. Returns the root.
    pub(crate) fn rebalance(&mut self, id: NodeId) -> NodeId {
        let min_keys = self.min_keys();
        let mut current = id;

        loop {
            let Some(parent) = self.arena[current].parent() else {
                return self.collapse_root(current);
            };

            let parent_node = &self.arena[parent];
            let Some(pos) = parent_node.child_position(current) else {
                panic!("node {current} is not a child of its parent {parent}");
            };
            let left = pos.checked_sub(1).map(|i| parent_node.children[i]);
            let right = parent_node.children.get(pos + 1).copied();

            match (left, right) {
                (Some(left), _) if !self.arena[left].can_donate(min_keys) => {
                    self.merge_children(parent, pos - 1);
                }
                (_, Some(right)) if !self.arena[right].can_donate(min_keys) => {
                    self.merge_children(parent, pos);
                }
                (Some(_), _) => {
                    self.rotate_from_left(parent, pos);
                    return self.root_of(parent);
                }
                (None, Some(_)) => {
                    self.rotate_from_right(parent, pos);
                    return self.root_of(parent);
                }
                (None, None) => panic!("node {current} has no siblings under {parent}"),
            }

            if !self.arena[parent].is_underfull(min_keys) {
                return self.root_of(parent);
            }
            current = parent;
        }
    }

    /// Merge `children[left_index + 1]` of `parent` into `children[left_index]`,
    /// pulling the separator between them down. The right child is released.
    pub(crate) fn merge_children(&mut self, parent: NodeId, left_index: usize) {
        let parent_node = &mut self.arena[parent];
        let separator = parent_node.keys.remove(left_index);
        let right = parent_node.children.remove(left_index + 1);
        let left = parent_node.children[left_index];

        let Some(mut right_node) = self.arena.deallocate(right) else {
            panic!("merge of dangling node {right}");
        };
        for &child in &right_node.children {
            self.arena[child].parent = left;
        }
        self.arena[left].merge_from(separator, &mut right_node);
        debug!(parent, left, right, "merged siblings");
    }

    /// Move the separator left of `children[pos]` down into that child and
    /// lift the left sibling's last key into the separator slot.
    fn rotate_from_left(&mut self, parent: NodeId, pos: usize) {
        let node = self.arena[parent].children[pos];
        let left = self.arena[parent].children[pos - 1];

        let Some((key, moved_child)) = self.arena[left].borrow_last() else {
            panic!("left sibling {left} has no key to lend");
        };
        let separator = std::mem::replace(&mut self.arena[parent].keys[pos - 1], key);
        self.arena[node].accept_from_left(separator, moved_child);
        if let Some(child) = moved_child {
            self.arena[child].parent = node;
        }
        debug!(node, sibling = left, "rotated key from left sibling");
    }

    /// Move the separator right of `children[pos]` down into that child and
    /// lift the right sibling's first key into the separator slot.
    fn rotate_from_right(&mut self, parent: NodeId, pos: usize) {
        let node = self.arena[parent].children[pos];
        let right = self.arena[parent].children[pos + 1];

        let Some((key, moved_child)) = self.arena[right].borrow_first() else {
            panic!("right sibling {right} has no key to lend");
        };
        let separator = std::mem::replace(&mut self.arena[parent].keys[pos], key);
        self.arena[node].accept_from_right(separator, moved_child);
        if let Some(child) = moved_child {
            self.arena[child].parent = node;
        }
        debug!(node, sibling = right, "rotated key from right sibling");
    }

    /// An emptied internal root hands the tree to its only child, repeatedly.
    /// Any other root stays as it is, however few keys it holds.
    fn collapse_root(&mut self, id: NodeId) -> NodeId {
        let mut root = id;
        while self.arena[root].is_empty() && !self.arena[root].is_leaf {
            let Some(old_root) = self.arena.deallocate(root) else {
                panic!("collapse of dangling root {root}");
            };
            let child = old_root.children[0];
            self.arena[child].parent = NULL_NODE;
            debug!(old_root = root, new_root = child, "root collapsed");
            root = child;
        }
        root
    }
}
