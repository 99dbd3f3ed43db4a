//! Validation and debugging utilities for BTreeIndex.
//!
//! This module contains invariant checking, debugging utilities and test
//! helpers. A cascade that leaves the tree in a state rejected here is a
//! bug in the tree, not in the caller.

use crate::error::{BTreeError, BTreeResult};
use crate::types::{BTreeIndex, NodeId};

/// Key bounds inherited from the ancestors of a node.
struct Bounds<'a, K> {
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<K: Ord> BTreeIndex<K> {
    /// Check if the tree maintains B-tree invariants.
    /// Returns true if all invariants are satisfied.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> BTreeResult<()> {
        let root = &self.arena[self.root];
        if root.parent().is_some() {
            return Err(BTreeError::node_error(self.root, "root has a parent"));
        }
        if root.is_empty() && !root.is_leaf {
            return Err(BTreeError::node_error(self.root, "empty internal root"));
        }

        let mut leaf_depth = None;
        let reachable = self.check_node_invariants(
            self.root,
            Bounds { lower: None, upper: None },
            0,
            &mut leaf_depth,
        )?;

        self.check_arena_tree_consistency(reachable)
    }

    /// Alias for check_invariants_detailed (for test compatibility).
    pub fn validate(&self) -> BTreeResult<()> {
        self.check_invariants_detailed()
    }

    /// Check if tree is in a valid state for operations
    pub fn validate_for_operation(&self, operation: &str) -> BTreeResult<()> {
        self.check_invariants_detailed().map_err(|e| {
            BTreeError::data_integrity(operation, &format!("Validation for {}: {}", operation, e))
        })
    }

    /// Check that every live arena slot is a node of the tree.
    fn check_arena_tree_consistency(&self, reachable: usize) -> BTreeResult<()> {
        let allocated = self.arena.allocated_count();
        if reachable != allocated {
            return Err(BTreeError::corrupted_tree(
                "Arena",
                &format!("{} nodes in tree vs {} allocated", reachable, allocated),
            ));
        }
        Ok(())
    }

    /// Recursively check `id` and its subtree; returns the number of nodes visited.
    fn check_node_invariants(
        &self,
        id: NodeId,
        bounds: Bounds<'_, K>,
        depth: usize,
        leaf_depth: &mut Option<usize>,
    ) -> BTreeResult<usize> {
        let Some(node) = self.arena.get(id) else {
            return Err(BTreeError::corrupted_tree(
                "Child link",
                &format!("node {} is not allocated", id),
            ));
        };
        let is_root = id == self.root;

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BTreeError::node_error(id, "keys are not strictly increasing"));
        }
        if node.is_overfull(self.max_keys()) {
            return Err(BTreeError::node_error(
                id,
                &format!("{} keys exceed the maximum of {}", node.len(), self.max_keys()),
            ));
        }
        if !is_root && node.is_underfull(self.min_keys()) {
            return Err(BTreeError::node_error(
                id,
                &format!("{} keys below the minimum of {}", node.len(), self.min_keys()),
            ));
        }

        if let (Some(lower), Some(first)) = (bounds.lower, node.keys.first()) {
            if first <= lower {
                return Err(BTreeError::node_error(id, "key not above its left separator"));
            }
        }
        if let (Some(upper), Some(last)) = (bounds.upper, node.keys.last()) {
            if last >= upper {
                return Err(BTreeError::node_error(id, "key not below its right separator"));
            }
        }

        if node.is_leaf {
            if !node.children.is_empty() {
                return Err(BTreeError::node_error(id, "leaf has children"));
            }
            return match *leaf_depth {
                Some(expected) if expected != depth => Err(BTreeError::corrupted_tree(
                    "Balance",
                    &format!("leaf {} at depth {}, expected {}", id, depth, expected),
                )),
                Some(_) => Ok(1),
                None => {
                    *leaf_depth = Some(depth);
                    Ok(1)
                }
            };
        }

        if node.children.len() != node.keys.len() + 1 {
            return Err(BTreeError::node_error(
                id,
                &format!("{} keys but {} children", node.keys.len(), node.children.len()),
            ));
        }

        let mut visited = 1;
        for (i, &child) in node.children.iter().enumerate() {
            if self.arena.get(child).and_then(|c| c.parent()) != Some(id) {
                return Err(BTreeError::corrupted_tree(
                    "Parent link",
                    &format!("child {} of node {} points elsewhere", child, id),
                ));
            }
            let child_bounds = Bounds {
                lower: if i == 0 { bounds.lower } else { Some(&node.keys[i - 1]) },
                upper: if i == node.keys.len() { bounds.upper } else { Some(&node.keys[i]) },
            };
            visited += self.check_node_invariants(child, child_bounds, depth + 1, leaf_depth)?;
        }
        Ok(visited)
    }

    // ============================================================================
    // DEBUGGING AND TESTING UTILITIES
    // ============================================================================

    /// Returns all keys in order (for testing/debugging).
    pub fn keys_in_order(&self) -> Vec<&K> {
        let mut keys = Vec::new();
        self.collect_keys(self.root, &mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, id: NodeId, keys: &mut Vec<&'a K>) {
        let node = &self.arena[id];
        if node.is_leaf {
            keys.extend(node.keys.iter());
            return;
        }
        for (i, &child) in node.children.iter().enumerate() {
            self.collect_keys(child, keys);
            if let Some(key) = node.keys.get(i) {
                keys.push(key);
            }
        }
    }

    /// Returns the sizes of all leaf nodes, left to right (for testing/debugging).
    pub fn leaf_sizes(&self) -> Vec<usize> {
        let mut sizes = Vec::new();
        self.collect_leaf_sizes(self.root, &mut sizes);
        sizes
    }

    fn collect_leaf_sizes(&self, id: NodeId, sizes: &mut Vec<usize>) {
        let node = &self.arena[id];
        if node.is_leaf {
            sizes.push(node.len());
        }
        for &child in &node.children {
            self.collect_leaf_sizes(child, sizes);
        }
    }
}
