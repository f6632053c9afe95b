//! Navigation state and the pure reducer that advances it.

use std::collections::BTreeSet;

use mfl_outline::{SectionRef, SectionTree};
use serde::Serialize;

use crate::fragment;

/// Sidebar view-state: the highlighted entry and the expanded sections.
///
/// `active_section_id` always names an entry of the tree the state was
/// created from. A child can only become active through a transition that
/// also expands its parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    active_section_id: String,
    expanded_section_ids: BTreeSet<String>,
}

impl NavigationState {
    /// Initial state: the first section is active, and expanded if it has
    /// children.
    pub fn initial(tree: &SectionTree) -> Self {
        let first = tree.first();
        let mut expanded_section_ids = BTreeSet::new();
        if first.has_children() {
            expanded_section_ids.insert(first.id.clone());
        }
        Self {
            active_section_id: first.id.clone(),
            expanded_section_ids,
        }
    }

    /// Id of the highlighted entry.
    pub fn active_section_id(&self) -> &str {
        &self.active_section_id
    }

    /// Ids of sections whose children are shown.
    pub fn expanded_section_ids(&self) -> &BTreeSet<String> {
        &self.expanded_section_ids
    }

    /// Whether `id` is the highlighted entry.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section_id == id
    }

    /// Whether the section `id` is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_section_ids.contains(id)
    }

    fn flip(&mut self, id: &str) {
        if !self.expanded_section_ids.remove(id) {
            self.expanded_section_ids.insert(id.to_owned());
        }
    }

    fn expand(&mut self, id: &str) {
        if !self.expanded_section_ids.contains(id) {
            self.expanded_section_ids.insert(id.to_owned());
        }
    }

    fn activate(&mut self, id: &str) {
        id.clone_into(&mut self.active_section_id);
    }
}

/// Input to the navigation state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The URL fragment changed (raw, possibly `#`-prefixed and encoded).
    FragmentChanged(String),
    /// The expand control of a section was used.
    ToggleExpansion(String),
    /// The reader clicked a sidebar entry.
    SelectSection(String),
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "id", rename_all = "camelCase")]
pub enum Effect {
    /// Scroll the element anchored at the id into view.
    ScrollTo(String),
}

/// Result of applying one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the event.
    pub state: NavigationState,
    /// Effect to perform after the state has been applied.
    pub effect: Option<Effect>,
}

impl Transition {
    fn unchanged(state: &NavigationState) -> Self {
        Self {
            state: state.clone(),
            effect: None,
        }
    }

    fn changed(state: NavigationState) -> Self {
        Self {
            state,
            effect: None,
        }
    }
}

/// Advance `state` by one event.
///
/// Pure: the scroll side effect of a selection is returned as
/// [`Effect::ScrollTo`] rather than performed. Ids not present in `tree`
/// leave the state unchanged and produce no effect.
pub fn reduce(tree: &SectionTree, state: &NavigationState, event: &NavEvent) -> Transition {
    match event {
        NavEvent::FragmentChanged(raw) => fragment_changed(tree, state, raw),
        NavEvent::ToggleExpansion(id) => toggle_expansion(tree, state, id),
        NavEvent::SelectSection(id) => select_section(tree, state, id),
    }
}

fn fragment_changed(tree: &SectionTree, state: &NavigationState, raw: &str) -> Transition {
    let Some(id) = fragment::normalize(raw) else {
        return Transition::unchanged(state);
    };

    let Some(entry) = tree.get(&id) else {
        tracing::debug!(fragment = %raw, "Ignoring fragment for unknown section");
        return Transition::unchanged(state);
    };

    let mut next = state.clone();
    next.activate(entry.id());
    if let Some(parent) = entry.parent() {
        next.expand(&parent.id);
    }
    Transition::changed(next)
}

fn toggle_expansion(tree: &SectionTree, state: &NavigationState, id: &str) -> Transition {
    match tree.section(id) {
        Some(section) if section.has_children() => {
            let mut next = state.clone();
            next.flip(id);
            Transition::changed(next)
        }
        _ => {
            tracing::debug!(id, "Ignoring toggle for non-expandable entry");
            Transition::unchanged(state)
        }
    }
}

fn select_section(tree: &SectionTree, state: &NavigationState, id: &str) -> Transition {
    let Some(entry) = tree.get(id) else {
        tracing::debug!(id, "Ignoring selection of unknown section");
        return Transition::unchanged(state);
    };

    let mut next = state.clone();
    next.activate(id);
    match entry {
        SectionRef::Parent(section) if section.has_children() => next.flip(id),
        SectionRef::Parent(_) => {}
        SectionRef::Child { parent, .. } => next.expand(&parent.id),
    }

    Transition {
        state: next,
        effect: Some(Effect::ScrollTo(id.to_owned())),
    }
}
