//! Node-level operations for BTreeIndex.
//!
//! Everything here touches a single node: occupancy checks, the local half
//! of a split, and the borrow/accept/merge helpers the delete cascade
//! strings together. Re-parenting of moved children is the tree's job.

use crate::types::{Node, NodeId, NULL_NODE};

impl<K: Ord> Node<K> {
    // ============================================================================
    // ACCESSORS
    // ============================================================================

    /// Returns the number of keys in this node.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if this node holds no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Sorted keys of this node.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Child handles, empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent handle, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        (self.parent != NULL_NODE).then_some(self.parent)
    }

    // ============================================================================
    // STATUS CHECKS
    // ============================================================================

    /// Returns true if this node holds more than `max_keys` keys.
    pub fn is_overfull(&self, max_keys: usize) -> bool {
        self.keys.len() > max_keys
    }

    /// Returns true if this node holds fewer than `min_keys` keys.
    pub fn is_underfull(&self, min_keys: usize) -> bool {
        self.keys.len() < min_keys
    }

    /// Returns true if this node can lend a key and stay within bounds.
    pub fn can_donate(&self, min_keys: usize) -> bool {
        self.keys.len() > min_keys
    }

    // ============================================================================
    // LOOKUP HELPERS
    // ============================================================================

    /// `Ok(i)` if `key` sits at position `i`, otherwise `Err(i)` with the
    /// position it would take (which is also the child to descend into).
    pub fn position(&self, key: &K) -> Result<usize, usize> {
        self.keys.binary_search(key)
    }

    /// Slot of `child` among this node's children.
    pub fn child_position(&self, child: NodeId) -> Option<usize> {
        self.children.iter().position(|&id| id == child)
    }

    // ============================================================================
    // SPLIT
    // ============================================================================

    /// Cut this node at `pos`: the key at `pos` is returned as the median,
    /// everything after it moves into the returned sibling, and this node
    /// keeps the first `pos` keys (and `pos + 1` children).
    ///
    /// The sibling's parent is left as `NULL_NODE` and its children still
    /// point at this node; the caller fixes both once the sibling is allocated.
    pub fn split_off(&mut self, pos: usize) -> (K, Node<K>) {
        let right_keys = self.keys.split_off(pos + 1);
        let right_children = if self.is_leaf {
            Vec::new()
        } else {
            self.children.split_off(pos + 1)
        };

        let Some(median) = self.keys.pop() else {
            panic!("split position {pos} past the end of a node");
        };

        let sibling = Node {
            keys: right_keys,
            children: right_children,
            parent: NULL_NODE,
            is_leaf: self.is_leaf,
        };

        (median, sibling)
    }

    // ============================================================================
    // BORROWING AND MERGING HELPERS
    // ============================================================================

    /// Take the last key (and last child, for internal nodes) from this node.
    /// Used when this node is the left sibling lending to its right neighbour.
    pub fn borrow_last(&mut self) -> Option<(K, Option<NodeId>)> {
        let key = self.keys.pop()?;
        let child = if self.is_leaf {
            None
        } else {
            self.children.pop()
        };
        Some((key, child))
    }

    /// Take the first key (and first child, for internal nodes) from this node.
    /// Used when this node is the right sibling lending to its left neighbour.
    pub fn borrow_first(&mut self) -> Option<(K, Option<NodeId>)> {
        if self.keys.is_empty() {
            return None;
        }
        let key = self.keys.remove(0);
        let child = if self.is_leaf {
            None
        } else {
            Some(self.children.remove(0))
        };
        Some((key, child))
    }

    /// Prepend the parent's separator and the child lent by the left sibling.
    pub fn accept_from_left(&mut self, separator: K, moved_child: Option<NodeId>) {
        self.keys.insert(0, separator);
        if let Some(child) = moved_child {
            self.children.insert(0, child);
        }
    }

    /// Append the parent's separator and the child lent by the right sibling.
    pub fn accept_from_right(&mut self, separator: K, moved_child: Option<NodeId>) {
        self.keys.push(separator);
        if let Some(child) = moved_child {
            self.children.push(child);
        }
    }

    /// Merge the separator from the parent and all content of `other` into this node.
    pub fn merge_from(&mut self, separator: K, other: &mut Node<K>) {
        self.keys.push(separator);
        self.keys.append(&mut other.keys);
        self.children.append(&mut other.children);
    }
}
