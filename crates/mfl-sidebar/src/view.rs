//! Sidebar view model.

use mfl_nav::{NavigationState, fragment};
use mfl_outline::{Section, SectionNode, SectionTree};
use serde::Serialize;

/// Options controlling link generation.
#[derive(Clone, Debug, Default)]
pub struct SidebarOptions {
    /// Prefix placed before `#fragment` in every link (e.g. `/documentation`).
    pub link_base: String,
}

/// Child link under an expanded section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    /// Section id (anchor).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Whether this is the highlighted entry.
    pub active: bool,
}

/// Top-level sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItem {
    /// Section id (anchor).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Link target.
    pub href: String,
    /// Whether this is the highlighted entry.
    pub active: bool,
    /// Whether one of the section's children is the highlighted entry.
    pub contains_active: bool,
    /// Whether the section offers an expand control.
    pub expandable: bool,
    /// Whether the section's children are shown.
    pub expanded: bool,
    /// Visible children (empty when collapsed).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarLink>,
}

/// Everything the sidebar needs for one render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    /// Top-level entries in outline order.
    pub items: Vec<SidebarItem>,
}

impl SidebarView {
    /// Build the view for `state` over `tree`.
    pub fn build(tree: &SectionTree, state: &NavigationState, options: &SidebarOptions) -> Self {
        let items = tree
            .sections()
            .iter()
            .map(|section| build_item(section, state, options))
            .collect();
        Self { items }
    }

    /// Find a top-level entry by id.
    pub fn item(&self, id: &str) -> Option<&SidebarItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

fn build_item(
    section: &Section,
    state: &NavigationState,
    options: &SidebarOptions,
) -> SidebarItem {
    let expandable = section.has_children();
    let expanded = expandable && state.is_expanded(&section.id);
    let children = if expanded {
        section
            .children
            .iter()
            .map(|node| build_link(node, state, options))
            .collect()
    } else {
        Vec::new()
    };

    SidebarItem {
        id: section.id.clone(),
        title: section.title.clone(),
        href: link(options, &section.id),
        active: state.is_active(&section.id),
        contains_active: section.child(state.active_section_id()).is_some(),
        expandable,
        expanded,
        children,
    }
}

fn build_link(
    node: &SectionNode,
    state: &NavigationState,
    options: &SidebarOptions,
) -> SidebarLink {
    SidebarLink {
        id: node.id.clone(),
        title: node.title.clone(),
        href: link(options, &node.id),
        active: state.is_active(&node.id),
    }
}

fn link(options: &SidebarOptions, id: &str) -> String {
    format!("{}{}", options.link_base, fragment::href(id))
}
