//! Construction and initialization logic for BTreeIndex and nodes.
//!
//! This module contains order validation, arena initialization, the
//! sequence-driven `build` constructor and the standard trait impls.

use crate::arena::CompactArena;
use crate::error::{BTreeError, InitResult};
use crate::types::{BTreeIndex, Node, NodeId, DEFAULT_ORDER, MIN_ORDER, NULL_NODE};

impl<K> BTreeIndex<K> {
    /// Create an empty B-tree of the given order.
    ///
    /// # Arguments
    ///
    /// * `order` - Maximum number of children per node (minimum 3)
    ///
    /// # Returns
    ///
    /// Returns `Ok(BTreeIndex)` if the order is valid, `Err(BTreeError)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::BTreeIndex;
    ///
    /// let tree = BTreeIndex::<i64>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(BTreeIndex::<i64>::new(2).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        validate_order(order)?;
        Ok(Self::with_checked_order(order))
    }

    /// Create a B-tree with the default order.
    ///
    /// This is equivalent to calling `new(DEFAULT_ORDER)`.
    pub fn with_default_order() -> Self {
        Self::with_checked_order(DEFAULT_ORDER)
    }

    fn with_checked_order(order: usize) -> Self {
        let mut arena = CompactArena::new();
        let root = arena.allocate(Node::leaf());
        Self { order, root, arena }
    }

    /// Release every node and start over from an empty root leaf.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.allocate(Node::leaf());
    }
}

impl<K: Ord> BTreeIndex<K> {
    /// Create a tree of the given order and insert `values` in sequence.
    ///
    /// Duplicates in `values` are absorbed silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::BTreeIndex;
    ///
    /// let tree = BTreeIndex::build(3, [41, 44, 96, 44]).unwrap();
    /// assert_eq!(tree.len(), 3);
    /// assert!(tree.search(&96));
    /// ```
    pub fn build<I>(order: usize, values: I) -> InitResult<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let mut tree = Self::new(order)?;
        tree.extend(values);
        Ok(tree)
    }
}

impl<K> Node<K> {
    /// Creates a new, empty leaf node.
    pub fn leaf() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
            parent: NULL_NODE,
            is_leaf: true,
        }
    }

    /// Creates an internal node with no keys and a single child.
    ///
    /// This is the shape of a freshly grown root just before the split that
    /// created it pushes the median up.
    pub(crate) fn branch_over(child: NodeId) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
            parent: NULL_NODE,
            is_leaf: false,
        }
    }
}

// Default implementations
impl<K> Default for BTreeIndex<K> {
    /// Create a B-tree with default order.
    fn default() -> Self {
        Self::with_default_order()
    }
}

impl<K> Default for Node<K> {
    fn default() -> Self {
        Self::leaf()
    }
}

impl<K: Ord> FromIterator<K> for BTreeIndex<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::with_default_order();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for BTreeIndex<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Validate that an order is usable for a B-tree.
pub(crate) fn validate_order(order: usize) -> InitResult<()> {
    if order < MIN_ORDER {
        Err(BTreeError::invalid_order(order, MIN_ORDER))
    } else {
        Ok(())
    }
}
