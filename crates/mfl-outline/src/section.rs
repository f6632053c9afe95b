//! Outline entry types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Child entry nested one level under a [`Section`].
///
/// Has no children of its own, which keeps the outline two levels deep.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectionNode {
    /// Anchor id, unique across the outline.
    pub id: String,
    /// Display label.
    pub title: String,
}

impl SectionNode {
    /// Create a child entry.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Top-level documentation topic.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    /// Anchor id, unique across the outline.
    pub id: String,
    /// Display label.
    pub title: String,
    /// Ordered child entries (empty for a leaf section).
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<SectionNode>,
}

impl Section {
    /// Create a section without children.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Append a child entry.
    #[must_use]
    pub fn with_child(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.children.push(SectionNode::new(id, title));
        self
    }

    /// Whether the section owns at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Find a direct child by id.
    pub fn child(&self, id: &str) -> Option<&SectionNode> {
        self.children.iter().find(|node| node.id == id)
    }
}
