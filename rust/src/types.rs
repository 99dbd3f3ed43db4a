//! Core types and data structures for BTreeIndex.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the B-tree implementation.

use crate::arena::CompactArena;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Smallest order a tree may be built with.
pub const MIN_ORDER: usize = 3;

/// Order used by `Default`, `FromIterator` and `with_default_order`.
pub const DEFAULT_ORDER: usize = 3;

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Node ID type for arena-based allocation
pub type NodeId = u32;

/// Marks the absence of a node (the root's parent).
pub const NULL_NODE: NodeId = u32::MAX;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// In-memory B-tree index of order M.
///
/// A B-tree keeps its keys in every level of the tree: each internal node
/// holds separator keys that are themselves members of the set, and every
/// leaf sits at the same depth. Nodes hold at most `M - 1` keys and, apart
/// from the root, at least `ceil(M / 2) - 1`.
///
/// # Examples
///
/// ```
/// use mwaytree::BTreeIndex;
///
/// let mut tree = BTreeIndex::new(3).unwrap();
/// tree.insert(41);
/// tree.insert(44);
/// tree.insert(96);
///
/// assert!(tree.search(&44));
/// assert!(!tree.search(&45));
/// assert_eq!(tree.render(), "(o, 44, o)\n([leaf] 41) ([leaf] 96)");
///
/// assert!(tree.delete(&44));
/// assert!(!tree.delete(&44));
/// assert_eq!(tree.len(), 2);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion**: O(M log n)
/// - **Lookup**: O(log n)
/// - **Deletion**: O(M log n)
#[derive(Debug)]
pub struct BTreeIndex<K> {
    /// Maximum number of children per node.
    pub(crate) order: usize,
    /// The node currently known as root.
    pub(crate) root: NodeId,
    /// Arena owning every node of the tree.
    pub(crate) arena: CompactArena<Node<K>>,
}

/// A single tree node.
///
/// Leaves have no children. An internal node with `n` keys has exactly
/// `n + 1` children, and `children[i]` holds the keys between `keys[i - 1]`
/// and `keys[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// Sorted keys.
    pub(crate) keys: Vec<K>,
    /// Child handles, empty for leaves.
    pub(crate) children: Vec<NodeId>,
    /// Back-reference used for upward cascades, `NULL_NODE` for the root.
    pub(crate) parent: NodeId,
    pub(crate) is_leaf: bool,
}

// ============================================================================
// ENUMS AND RESULT TYPES
// ============================================================================

/// Outcome of a descent through the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    /// The key sits in `node` at `index`.
    Found { node: NodeId, index: usize },
    /// The key is absent; it would be inserted into leaf `node` at `index`.
    NotFound { node: NodeId, index: usize },
}

impl SearchResult {
    /// Returns true if the key was present.
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// The node the descent stopped at.
    pub fn node(&self) -> NodeId {
        match *self {
            SearchResult::Found { node, .. } | SearchResult::NotFound { node, .. } => node,
        }
    }

    /// Position of the key (or of its insertion point) within `node()`.
    pub fn index(&self) -> usize {
        match *self {
            SearchResult::Found { index, .. } | SearchResult::NotFound { index, .. } => index,
        }
    }
}
