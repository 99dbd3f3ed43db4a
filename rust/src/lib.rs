//! M-way B-tree index in Rust.
//!
//! This crate provides an in-memory ordered index: a balanced multi-way
//! search tree of a configurable order M supporting search, insertion with
//! node splitting and deletion with node merging and redistribution. It is a
//! pure key-existence structure; keys carry no values.
//!
//! Nodes live in a compact arena and refer to each other by [`NodeId`].
//! Children are owned through the arena by their parent, and the parent
//! link is a plain handle used to walk back up during split and rebalance
//! cascades.
//!
//! ```
//! use mwaytree::BTreeIndex;
//!
//! let mut tree = BTreeIndex::build(3, [41, 44, 96, 46, 42, 20, 43]).unwrap();
//! assert_eq!(
//!     tree.render(),
//!     "(o, 41, o, 44, o)\n([leaf] 20) ([leaf] 42, 43) ([leaf] 46, 96)"
//! );
//!
//! assert!(tree.delete(&41));
//! assert!(!tree.search(&41));
//! assert!(tree.check_invariants());
//! ```

mod arena;
mod construction;
mod delete_operations;
mod error;
mod get_operations;
mod insert_operations;
mod node;
mod render;
mod tree_structure;
mod types;
mod validation;

pub use arena::{ArenaStats, CompactArena};
pub use error::{BTreeError, BTreeResult, BTreeResultExt, InitResult, ModifyResult};
pub use types::{
    BTreeIndex, Node, NodeId, SearchResult, DEFAULT_ORDER, MIN_ORDER, NULL_NODE,
};
