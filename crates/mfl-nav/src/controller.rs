//! Stateful controller wiring the reducer to a viewport.

use std::collections::BTreeSet;
use std::sync::Arc;

use mfl_outline::SectionTree;

use crate::state::{Effect, NavEvent, NavigationState, reduce};
use crate::viewport::Viewport;

/// Sole owner of the navigation state for one page view.
///
/// Every mutation goes through [`dispatch`](Self::dispatch): the reducer's
/// new state is stored first, then its effect is handed to the viewport.
/// A burst of selections therefore always leaves the state matching the
/// last one, whatever the viewport does with earlier scrolls.
pub struct NavigationController<V> {
    tree: Arc<SectionTree>,
    state: NavigationState,
    viewport: V,
}

impl<V: Viewport> NavigationController<V> {
    /// Create a controller in the initial state for `tree`.
    pub fn new(tree: Arc<SectionTree>, viewport: V) -> Self {
        let state = NavigationState::initial(&tree);
        tracing::debug!(active = %state.active_section_id(), "Navigation initialized");
        Self {
            tree,
            state,
            viewport,
        }
    }

    /// Apply one event and perform its effect.
    ///
    /// Returns the effect that was handed to the viewport, if any.
    pub fn dispatch(&mut self, event: &NavEvent) -> Option<Effect> {
        let transition = reduce(&self.tree, &self.state, event);
        if transition.state != self.state {
            tracing::debug!(
                ?event,
                active = %transition.state.active_section_id(),
                expanded = ?transition.state.expanded_section_ids(),
                "Navigation state changed"
            );
        }
        self.state = transition.state;

        if let Some(effect) = &transition.effect {
            self.perform(effect);
        }
        transition.effect
    }

    /// React to a URL fragment change (including the one present on load).
    pub fn on_fragment_changed(&mut self, fragment: &str) {
        self.dispatch(&NavEvent::FragmentChanged(fragment.to_owned()));
    }

    /// Flip the expansion of a section with children.
    pub fn toggle_expansion(&mut self, section_id: &str) {
        self.dispatch(&NavEvent::ToggleExpansion(section_id.to_owned()));
    }

    /// Handle a click on a sidebar entry.
    pub fn select_section(&mut self, id: &str) {
        self.dispatch(&NavEvent::SelectSection(id.to_owned()));
    }

    fn perform(&mut self, effect: &Effect) {
        match effect {
            Effect::ScrollTo(id) => self.viewport.scroll_to_element(id),
        }
    }
}

impl<V> NavigationController<V> {
    /// Outline the controller navigates.
    pub fn tree(&self) -> &SectionTree {
        &self.tree
    }

    /// Current state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Id of the highlighted entry.
    pub fn active_section_id(&self) -> &str {
        self.state.active_section_id()
    }

    /// Ids of expanded sections.
    pub fn expanded_section_ids(&self) -> &BTreeSet<String> {
        self.state.expanded_section_ids()
    }

    /// Whether `id` is the highlighted entry.
    pub fn is_active(&self, id: &str) -> bool {
        self.state.is_active(id)
    }

    /// Whether the section `id` is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.is_expanded(id)
    }

    /// Viewport receiving scroll requests.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Consume the controller, returning its viewport.
    pub fn into_viewport(self) -> V {
        self.viewport
    }
}
