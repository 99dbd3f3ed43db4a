//! INSERT operations for BTreeIndex.
//!
//! This module contains key insertion and the split cascade that grows the
//! tree: an overflowing node is cut at its median, the median moves up into
//! the parent, and the cut repeats on the parent while it overflows. A root
//! split allocates a new root above the old one.

use tracing::{debug, trace};

use crate::error::{BTreeResultExt, ModifyResult};
use crate::types::{BTreeIndex, Node, NodeId, SearchResult};

impl<K: Ord> BTreeIndex<K> {
    /// Insert `value` into the tree.
    ///
    /// Returns `true` if the value was added and `false` if it was already
    /// present, in which case the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::BTreeIndex;
    ///
    /// let mut tree = BTreeIndex::new(3).unwrap();
    /// assert!(tree.insert(7));
    /// assert!(!tree.insert(7));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: K) -> bool {
        let (leaf, index) = match self.locate(&value) {
            SearchResult::Found { node, .. } => {
                trace!(node, "insert: key already present");
                return false;
            }
            SearchResult::NotFound { node, index } => (node, index),
        };

        trace!(leaf, index, "insert");
        let max_keys = self.max_keys();
        let node = &mut self.arena[leaf];
        node.keys.insert(index, value);
        if node.is_overfull(max_keys) {
            self.root = self.split(leaf);
        }
        true
    }

    /// Insert with invariant validation before and after the mutation.
    pub fn try_insert(&mut self, value: K) -> ModifyResult<bool> {
        self.check_invariants_detailed().with_operation("insert")?;

        let inserted = self.insert(value);

        self.check_invariants_detailed().with_operation("insert")?;
        Ok(inserted)
    }

    // ============================================================================
    // HELPERS FOR INSERT OPERATIONS
    // ============================================================================

    /// Split the overflowing node `id`, cascading up through overflowing
    /// parents. Returns the root once every node is back within bounds.
    pub(crate) fn split(&mut self, id: NodeId) -> NodeId {
        let pos = (self.order - 1) / 2;
        let max_keys = self.max_keys();
        let mut current = id;

        loop {
            let parent = match self.arena[current].parent() {
                Some(parent) => parent,
                None => self.grow_root(current),
            };

            let (median, mut sibling) = self.arena[current].split_off(pos);
            sibling.parent = parent;
            let sibling_id = self.arena.allocate(sibling);
            self.adopt_children(sibling_id);

            let parent_node = &mut self.arena[parent];
            let slot = parent_node.keys.partition_point(|key| *key < median);
            parent_node.keys.insert(slot, median);
            parent_node.children.insert(slot + 1, sibling_id);
            debug!(node = current, sibling = sibling_id, parent, slot, "split node");

            if !parent_node.is_overfull(max_keys) {
                return self.root_of(parent);
            }
            current = parent;
        }
    }

    /// Allocate a keyless root above `old_root` and return it.
    fn grow_root(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self.arena.allocate(Node::branch_over(old_root));
        self.arena[old_root].parent = new_root;
        debug!(old_root, new_root, "root grown");
        new_root
    }

    /// Point every child of `id` back at `id`.
    pub(crate) fn adopt_children(&mut self, id: NodeId) {
        for i in 0..self.arena[id].children.len() {
            let child = self.arena[id].children[i];
            self.arena[child].parent = id;
        }
    }
}
