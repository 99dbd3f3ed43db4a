//! Error handling and result types for BTreeIndex operations.
//!
//! Search and delete misses are reported as plain booleans; the errors here
//! cover construction and the checked operations that validate the tree.

use thiserror::Error;

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BTreeError {
    /// Key not found in the tree.
    #[error("Key not found in tree")]
    KeyNotFound,
    /// Order below the supported minimum.
    #[error("Invalid order: order {order} is invalid (minimum required: {min})")]
    InvalidOrder { order: usize, min: usize },
    /// Internal data structure integrity violation.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
    /// A single node breaks a local invariant.
    #[error("Node error: {0}")]
    NodeError(String),
    /// Tree-wide shape is inconsistent.
    #[error("Corrupted tree: {0}")]
    CorruptedTree(String),
}

impl BTreeError {
    /// Create an InvalidOrder error
    pub fn invalid_order(order: usize, min: usize) -> Self {
        Self::InvalidOrder { order, min }
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a NodeError with context
    pub fn node_error(node_id: u32, details: &str) -> Self {
        Self::NodeError(format!("node {}: {}", node_id, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Check if this error is an order error
    pub fn is_order_error(&self) -> bool {
        matches!(self, Self::InvalidOrder { .. })
    }

    /// Check if this error reports a broken invariant
    pub fn is_integrity_error(&self) -> bool {
        matches!(
            self,
            Self::DataIntegrityError(_) | Self::NodeError(_) | Self::CorruptedTree(_)
        )
    }
}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;

/// Result extension trait for attaching operation context
pub trait BTreeResultExt<T> {
    /// Convert to a BTreeResult with additional context
    fn with_context(self, context: &str) -> BTreeResult<T>;

    /// Convert to a BTreeResult with operation context
    fn with_operation(self, operation: &str) -> BTreeResult<T>;
}

impl<T> BTreeResultExt<T> for Result<T, BTreeError> {
    fn with_context(self, context: &str) -> BTreeResult<T> {
        self.map_err(|e| match e {
            BTreeError::KeyNotFound => BTreeError::KeyNotFound,
            BTreeError::InvalidOrder { order, min } => BTreeError::InvalidOrder { order, min },
            BTreeError::DataIntegrityError(msg) => BTreeError::data_integrity(context, &msg),
            BTreeError::NodeError(msg) | BTreeError::CorruptedTree(msg) => {
                BTreeError::data_integrity(context, &msg)
            }
        })
    }

    fn with_operation(self, operation: &str) -> BTreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}
