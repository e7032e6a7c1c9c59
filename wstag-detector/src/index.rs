//! Workspace → leaf window index.
//!
//! The tree has a fixed shape at the top:
//!
//! ```text
//! root
//!   output (one per monitor, plus __i3)
//!     content            <- only containers named "content" are kept
//!       workspace (num)  <- subtree walked for leaves
//!         split / tabbed / stacked ... / window leaves
//! ```

use std::collections::BTreeMap;

use wstag_core::{WindowNode, WindowProperties};

/// Leaf windows of every workspace, keyed by workspace number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceWindowIndex {
    windows: BTreeMap<i32, Vec<WindowProperties>>,
}

impl WorkspaceWindowIndex {
    pub fn build(root: &WindowNode) -> Self {
        let mut windows = BTreeMap::new();

        let workspaces = root
            .children()
            .iter()
            .flat_map(WindowNode::children)
            .filter(|c| c.name() == Some("content"))
            .flat_map(WindowNode::children);

        for ws in workspaces {
            let WindowNode::Container { num, name, .. } = ws else {
                continue;
            };
            let Some(num) = *num else {
                tracing::warn!(name = ?name, "content child without workspace number, skipped");
                continue;
            };
            let mut leaves = Vec::new();
            collect_leaves(ws, &mut leaves);
            tracing::debug!(num, windows = leaves.len(), "indexed workspace");
            windows.insert(num, leaves);
        }

        Self { windows }
    }

    /// Leaves of workspace `num`, or `None` if the tree has no such workspace.
    pub fn get(&self, num: i32) -> Option<&[WindowProperties]> {
        self.windows.get(&num).map(Vec::as_slice)
    }

    pub fn workspaces(&self) -> impl Iterator<Item = i32> + '_ {
        self.windows.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

// Depth is bounded by the conversion into WindowNode.
fn collect_leaves(node: &WindowNode, out: &mut Vec<WindowProperties>) {
    match node {
        WindowNode::Leaf { properties } => out.push(properties.clone()),
        WindowNode::Container { children, .. } => {
            for child in children {
                collect_leaves(child, out);
            }
        }
    }
}
