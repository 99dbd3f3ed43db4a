//! Level-order text dump of a tree.
//!
//! One line per depth, nodes separated by a space. Internal nodes interleave
//! `o` child markers with their keys, leaves are tagged `[leaf]`:
//!
//! ```text
//! (o, 41, o, 44, o)
//! ([leaf] 20) ([leaf] 42, 43) ([leaf] 46, 96)
//! ```
//!
//! Meant for diagnostics and test assertions, not as a stable format.

use std::fmt::{self, Display};

use crate::types::{BTreeIndex, Node, NodeId};

impl<K: Display> BTreeIndex<K> {
    /// Render the tree level by level.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        let mut level: Vec<NodeId> = vec![self.root];

        while !level.is_empty() {
            let mut next_level = Vec::new();
            let rendered: Vec<String> = level
                .iter()
                .map(|&id| {
                    let node = &self.arena[id];
                    next_level.extend_from_slice(&node.children);
                    render_node(node)
                })
                .collect();
            lines.push(rendered.join(" "));
            level = next_level;
        }

        lines.join("\n")
    }
}

fn render_node<K: Display>(node: &Node<K>) -> String {
    let mut parts = Vec::with_capacity(node.keys.len() + node.children.len());
    for (i, key) in node.keys.iter().enumerate() {
        if !node.is_leaf {
            parts.push("o".to_string());
        }
        parts.push(key.to_string());
        if !node.is_leaf && i + 1 == node.keys.len() {
            parts.push("o".to_string());
        }
    }

    if node.is_leaf {
        format!("([leaf] {})", parts.join(", "))
    } else if node.keys.is_empty() {
        // Only reachable mid-cascade, kept readable for debugging.
        format!("({})", vec!["o"; node.children.len()].join(", "))
    } else {
        format!("({})", parts.join(", "))
    }
}

impl<K: Display> Display for BTreeIndex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
