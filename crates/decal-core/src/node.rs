//! The design-node tree that generators consume.
//!
//! Nodes arrive from a design tool export as a nested tree: every node
//! carries a resolved [`StyleMap`](crate::style::StyleMap), text nodes carry
//! their characters, and auto-layout frames carry a [`LayoutMode`]. The model
//! is deliberately lossy about tool internals (vector networks, constraints,
//! plugin data) because the generators only look at styles, fills, and
//! structure.

use smallvec::SmallVec;

use crate::style::StyleMap;

/// Node categories the generators distinguish.
///
/// Anything a design tool exports that is not one of the known kinds maps to
/// [`NodeType::Unknown`] and is treated as a plain container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum NodeType {
    /// A text layer with concrete characters.
    Text,
    /// A frame, possibly auto-layout.
    #[default]
    Frame,
    /// A loose grouping of layers.
    Group,
    /// An instance of a reusable component.
    Instance,
    /// A component definition.
    Component,
    /// Any node kind this model does not track.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

impl NodeType {
    /// Whether children of this node are expected to be emitted.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            NodeType::Frame | NodeType::Group | NodeType::Instance | NodeType::Component
        )
    }
}

/// Auto-layout direction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum LayoutMode {
    /// Free placement, no auto-layout.
    #[default]
    None,
    /// Children flow left to right.
    Horizontal,
    /// Children flow top to bottom.
    Vertical,
}

impl LayoutMode {
    pub fn is_auto(self) -> bool {
        !matches!(self, LayoutMode::None)
    }
}

/// A single paint on a node.
///
/// Only solid paints influence generation; other kinds (gradients, images)
/// are carried through untouched so a caller can still inspect them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fill {
    /// Paint kind as exported by the tool, e.g. `SOLID` or `IMAGE`.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
    /// Hidden paints are skipped during background resolution.
    #[cfg_attr(feature = "serde", serde(default = "default_true"))]
    pub visible: bool,
    /// Pre-resolved CSS color, present for solid paints.
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<String>,
}

#[cfg(feature = "serde")]
fn default_true() -> bool {
    true
}

impl Fill {
    /// A visible solid paint with a resolved color.
    pub fn solid(color: impl Into<String>) -> Self {
        Fill {
            kind: "SOLID".to_string(),
            visible: true,
            color: Some(color.into()),
        }
    }

    /// True when this paint contributes a background color.
    pub fn is_solid(&self) -> bool {
        self.kind == "SOLID" && self.visible && self.color.is_some()
    }
}

/// One node of the design tree.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignNode {
    /// Layer name as shown in the design tool.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub node_type: NodeType,
    /// Text content, only meaningful for [`NodeType::Text`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Option<String>,
    #[cfg_attr(feature = "serde", serde(rename = "layoutMode", default))]
    pub layout_mode: LayoutMode,
    /// Flat CSS-like declarations resolved by the exporter.
    #[cfg_attr(feature = "serde", serde(default))]
    pub style: StyleMap,
    /// Paint stack, bottom to top.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: SmallVec<[Fill; 2]>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<DesignNode>,
}

impl DesignNode {
    /// An empty frame with the given layer name.
    pub fn frame(name: impl Into<String>) -> Self {
        DesignNode {
            name: name.into(),
            node_type: NodeType::Frame,
            ..DesignNode::default()
        }
    }

    /// A text node with the given characters.
    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        DesignNode {
            name: name.into(),
            node_type: NodeType::Text,
            characters: Some(characters.into()),
            ..DesignNode::default()
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        DesignNode {
            name: name.into(),
            node_type: NodeType::Group,
            ..DesignNode::default()
        }
    }

    pub fn instance(name: impl Into<String>) -> Self {
        DesignNode {
            name: name.into(),
            node_type: NodeType::Instance,
            ..DesignNode::default()
        }
    }

    pub fn component(name: impl Into<String>) -> Self {
        DesignNode {
            name: name.into(),
            node_type: NodeType::Component,
            ..DesignNode::default()
        }
    }

    pub fn with_layout(mut self, mode: LayoutMode) -> Self {
        self.layout_mode = mode;
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property, value);
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fills.push(fill);
        self
    }

    pub fn with_child(mut self, child: DesignNode) -> Self {
        self.children.push(child);
        self
    }

    /// The color of the first visible solid paint, if any.
    ///
    /// This is the node's effective background as far as generation is
    /// concerned; image and gradient paints are handled through styles.
    pub fn background_color(&self) -> Option<&str> {
        self.fills
            .iter()
            .find(|fill| fill.is_solid())
            .and_then(|fill| fill.color.as_deref())
    }

    /// Depth of the subtree rooted at this node, counting this node.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(DesignNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total node count of the subtree, counting this node.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(DesignNode::count).sum::<usize>()
    }
}
