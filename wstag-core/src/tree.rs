//! Container tree as reported by the window manager.
//!
//! The wire format is an untyped recursive node. It is converted into
//! [`WindowNode`], which is either a container or a leaf window, decided by a
//! truthy `window` field (X11 window id) or, on sway, an `app_id`. Conversion
//! refuses trees deeper than [`MAX_TREE_DEPTH`].

use serde::{Deserialize, Serialize};

use crate::error::TagError;

/// Maximum nesting accepted from the window manager.
///
/// Each tree level costs two JSON nesting levels (node object and `nodes`
/// array), so this stays well below `serde_json`'s recursion limit of 128.
pub const MAX_TREE_DEPTH: usize = 48;

/// Window metadata used for classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_role: Option<String>,
}

/// `window` is an integer id on i3 and may be a plain flag in hand-written trees.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WindowField {
    Id(u64),
    Flag(bool),
}

impl WindowField {
    fn is_truthy(&self) -> bool {
        match self {
            WindowField::Id(id) => *id != 0,
            WindowField::Flag(flag) => *flag,
        }
    }
}

/// Raw node shape, only the fields wstag reads.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    num: Option<i32>,
    #[serde(default)]
    window: Option<WindowField>,
    #[serde(default)]
    app_id: Option<String>,
    #[serde(default)]
    window_properties: Option<WindowProperties>,
    #[serde(default)]
    nodes: Vec<RawNode>,
    #[serde(default)]
    floating_nodes: Vec<RawNode>,
}

/// A node of the container tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNode")]
pub enum WindowNode {
    Container {
        name: Option<String>,
        num: Option<i32>,
        children: Vec<WindowNode>,
    },
    Leaf {
        properties: WindowProperties,
    },
}

impl WindowNode {
    pub fn container(name: impl Into<String>, children: Vec<WindowNode>) -> Self {
        WindowNode::Container {
            name: Some(name.into()),
            num: None,
            children,
        }
    }

    pub fn workspace(num: i32, children: Vec<WindowNode>) -> Self {
        WindowNode::Container {
            name: Some(num.to_string()),
            num: Some(num),
            children,
        }
    }

    pub fn leaf(properties: WindowProperties) -> Self {
        WindowNode::Leaf { properties }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            WindowNode::Container { name, .. } => name.as_deref(),
            WindowNode::Leaf { .. } => None,
        }
    }

    pub fn children(&self) -> &[WindowNode] {
        match self {
            WindowNode::Container { children, .. } => children,
            WindowNode::Leaf { .. } => &[],
        }
    }

    fn from_raw(raw: RawNode, depth: usize) -> Result<Self, TagError> {
        if depth > MAX_TREE_DEPTH {
            return Err(TagError::TreeTooDeep { max: MAX_TREE_DEPTH });
        }

        let is_window = raw.window.as_ref().is_some_and(WindowField::is_truthy)
            || raw.app_id.is_some();
        if is_window {
            let mut properties = raw.window_properties.unwrap_or_default();
            if properties.class.is_none() {
                properties.class = raw.app_id;
            }
            return Ok(WindowNode::Leaf { properties });
        }

        let children = raw
            .nodes
            .into_iter()
            .chain(raw.floating_nodes)
            .map(|child| Self::from_raw(child, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(WindowNode::Container {
            name: raw.name,
            num: raw.num,
            children,
        })
    }
}

impl TryFrom<RawNode> for WindowNode {
    type Error = TagError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        Self::from_raw(raw, 0)
    }
}
