//! Validated, indexed section tree.
//!
//! Sections are stored in document order with a flat id index mapping every
//! id (parent or child) to its position. This gives O(1) `contains` and
//! parent lookups without walking the tree.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::section::{Section, SectionNode};

/// Outline construction error.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum OutlineError {
    /// The outline has no sections.
    #[error("outline must contain at least one section")]
    Empty,
    /// An id is empty.
    #[error("section id cannot be empty (title: {title:?})")]
    EmptyId {
        /// Title of the offending entry.
        title: String,
    },
    /// An id contains characters that cannot appear in a URL fragment anchor.
    #[error("section id {0:?} must not contain whitespace or '#'")]
    InvalidId(String),
    /// A title is empty or blank.
    #[error("section {0:?} has an empty title")]
    EmptyTitle(String),
    /// The same id appears more than once.
    #[error("duplicate section id {0:?}")]
    DuplicateId(String),
}

/// Position of an id within the tree.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Parent(usize),
    Child(usize, usize),
}

/// Resolved outline entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionRef<'a> {
    /// A top-level section.
    Parent(&'a Section),
    /// A child entry together with its owning section.
    Child {
        /// Owning top-level section.
        parent: &'a Section,
        /// The child entry.
        node: &'a SectionNode,
    },
}

impl<'a> SectionRef<'a> {
    /// Id of the entry.
    pub fn id(&self) -> &'a str {
        match self {
            Self::Parent(section) => &section.id,
            Self::Child { node, .. } => &node.id,
        }
    }

    /// Display title of the entry.
    pub fn title(&self) -> &'a str {
        match self {
            Self::Parent(section) => &section.title,
            Self::Child { node, .. } => &node.title,
        }
    }

    /// Owning section for a child, `None` for a top-level section.
    pub fn parent(&self) -> Option<&'a Section> {
        match self {
            Self::Parent(_) => None,
            Self::Child { parent, .. } => Some(parent),
        }
    }
}

/// Immutable two-level documentation outline.
///
/// Invariants upheld by [`SectionTree::new`]:
/// - at least one top-level section
/// - every id is non-empty, free of whitespace and `#`
/// - every title is non-blank
/// - ids are unique across sections and children
#[derive(Clone, Debug)]
pub struct SectionTree {
    sections: Vec<Section>,
    index: HashMap<String, Slot>,
}

impl PartialEq for SectionTree {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for SectionTree {}

impl SectionTree {
    /// Build a tree from top-level sections.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineError`] if the outline is empty or any entry violates
    /// the id/title rules.
    pub fn new(sections: Vec<Section>) -> Result<Self, OutlineError> {
        if sections.is_empty() {
            return Err(OutlineError::Empty);
        }

        let mut index = HashMap::new();
        for (i, section) in sections.iter().enumerate() {
            validate_entry(&section.id, &section.title)?;
            insert_unique(&mut index, &section.id, Slot::Parent(i))?;

            for (j, node) in section.children.iter().enumerate() {
                validate_entry(&node.id, &node.title)?;
                insert_unique(&mut index, &node.id, Slot::Child(i, j))?;
            }
        }

        Ok(Self { sections, index })
    }

    /// Build a tree from sections known to satisfy the invariants.
    pub(crate) fn from_trusted(sections: Vec<Section>) -> Self {
        let index = sections
            .iter()
            .enumerate()
            .flat_map(|(i, section)| {
                std::iter::once((section.id.clone(), Slot::Parent(i))).chain(
                    section
                        .children
                        .iter()
                        .enumerate()
                        .map(move |(j, node)| (node.id.clone(), Slot::Child(i, j))),
                )
            })
            .collect();

        Self { sections, index }
    }

    /// Top-level sections in document order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First top-level section.
    pub fn first(&self) -> &Section {
        // Non-empty by construction.
        &self.sections[0]
    }

    /// Total number of entries (sections and children).
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false: a tree holds at least one section.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether `id` names any entry in the tree.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Resolve an id to its entry.
    pub fn get(&self, id: &str) -> Option<SectionRef<'_>> {
        self.index.get(id).map(|slot| match *slot {
            Slot::Parent(i) => SectionRef::Parent(&self.sections[i]),
            Slot::Child(i, j) => {
                let parent = &self.sections[i];
                SectionRef::Child {
                    parent,
                    node: &parent.children[j],
                }
            }
        })
    }

    /// Top-level section by id. Child ids answer `None`.
    pub fn section(&self, id: &str) -> Option<&Section> {
        match self.index.get(id) {
            Some(Slot::Parent(i)) => Some(&self.sections[*i]),
            _ => None,
        }
    }

    /// Owning section of a child id.
    ///
    /// Returns `None` for top-level ids and unknown ids.
    pub fn lookup_parent(&self, child_id: &str) -> Option<&Section> {
        match self.index.get(child_id) {
            Some(Slot::Child(i, _)) => Some(&self.sections[*i]),
            _ => None,
        }
    }

    /// All ids in document order (each section followed by its children).
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().flat_map(|section| {
            std::iter::once(section.id.as_str())
                .chain(section.children.iter().map(|node| node.id.as_str()))
        })
    }
}

fn validate_entry(id: &str, title: &str) -> Result<(), OutlineError> {
    if id.is_empty() {
        return Err(OutlineError::EmptyId {
            title: title.to_owned(),
        });
    }
    if id.chars().any(|c| c.is_whitespace() || c == '#') {
        return Err(OutlineError::InvalidId(id.to_owned()));
    }
    if title.trim().is_empty() {
        return Err(OutlineError::EmptyTitle(id.to_owned()));
    }
    Ok(())
}

fn insert_unique(
    index: &mut HashMap<String, Slot>,
    id: &str,
    slot: Slot,
) -> Result<(), OutlineError> {
    match index.entry(id.to_owned()) {
        Entry::Occupied(_) => Err(OutlineError::DuplicateId(id.to_owned())),
        Entry::Vacant(entry) => {
            entry.insert(slot);
            Ok(())
        }
    }
}

impl TryFrom<Vec<Section>> for SectionTree {
    type Error = OutlineError;

    fn try_from(sections: Vec<Section>) -> Result<Self, Self::Error> {
        Self::new(sections)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SectionTree {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SectionTree {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let sections = Vec::<Section>::deserialize(deserializer)?;
        Self::new(sections).map_err(serde::de::Error::custom)
    }
}
