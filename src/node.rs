use std::fmt;

use crate::attrs::{AttrValue, Attributes};

/// Immutable tree value produced by a render pass.
///
/// Each node records the label of the renderable that produced it, the
/// attributes it was rendered with, and the nodes produced below it. A leaf
/// render yields a childless node; every non-squashing wrapper layer adds
/// exactly one level of depth above it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderNode {
    label: String,
    attrs: Attributes,
    children: Vec<RenderNode>,
}

impl RenderNode {
    pub fn element(label: impl Into<String>, attrs: Attributes) -> Self {
        Self {
            label: label.into(),
            attrs,
            children: Vec::new(),
        }
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: RenderNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn attrs(&self) -> &Attributes {
        &self.attrs
    }

    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }

    /// Depth of the tree rooted at this node. A childless node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(RenderNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Descend through first children to the innermost node.
    pub fn leaf(&self) -> &RenderNode {
        let mut node = self;
        while let Some(child) = node.children.first() {
            node = child;
        }
        node
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        writeln!(f, "{:indent$}{} [{}]", "", self.label, self.attrs, indent = indent)?;
        for child in &self.children {
            child.fmt_indented(f, indent + 2)?;
        }
        Ok(())
    }
}

impl fmt::Display for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
