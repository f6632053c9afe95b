//! Section navigation for the mfl docs site.
//!
//! Tracks which outline entry is active and which sections are expanded,
//! keeps that state in step with the page's URL fragment, and asks the
//! viewport to scroll when the reader picks an entry.
//!
//! The state machine is a pure function ([`reduce`]) from the current
//! [`NavigationState`] and a [`NavEvent`] to a [`Transition`]: the next state
//! plus an optional [`Effect`]. [`NavigationController`] owns the state and
//! performs effects through a [`Viewport`].
//!
//! Unknown or malformed ids are absorbed silently: they can only come from a
//! stale URL fragment, which the reader cannot act on.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use mfl_nav::{NavigationController, NullViewport};
//! use mfl_outline::documentation_outline;
//!
//! let mut nav = NavigationController::new(Arc::new(documentation_outline()), NullViewport);
//! assert_eq!(nav.active_section_id(), "getting-started");
//!
//! nav.on_fragment_changed("#mfl-init");
//! assert_eq!(nav.active_section_id(), "mfl-init");
//! assert!(nav.is_expanded("api"));
//! ```

mod controller;
pub mod fragment;
mod state;
mod viewport;

pub use controller::NavigationController;
pub use state::{Effect, NavEvent, NavigationState, Transition, reduce};
#[cfg(any(test, feature = "mock"))]
pub use viewport::RecordingViewport;
pub use viewport::{NullViewport, Viewport};
