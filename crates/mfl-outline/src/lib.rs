//! Documentation outline for the mfl docs site.
//!
//! The outline is a two-level tree: top-level [`Section`]s, each owning an
//! ordered list of [`SectionNode`] children. Ids are unique across the whole
//! tree and double as in-page anchors, so a URL fragment names exactly one
//! entry.
//!
//! A [`SectionTree`] is validated once at construction and is immutable
//! afterwards. Lookups never fail: unknown ids answer `None` or `false`.
//!
//! # Example
//!
//! ```
//! use mfl_outline::{Section, SectionTree};
//!
//! let tree = SectionTree::new(vec![
//!     Section::new("a", "A").with_child("a1", "A1").with_child("a2", "A2"),
//!     Section::new("b", "B"),
//! ])
//! .unwrap();
//!
//! assert!(tree.contains("a2"));
//! assert_eq!(tree.lookup_parent("a2").map(|s| s.id.as_str()), Some("a"));
//! assert!(tree.lookup_parent("b").is_none());
//! ```

mod builtin;
mod section;
mod tree;

pub use builtin::documentation_outline;
pub use section::{Section, SectionNode};
pub use tree::{OutlineError, SectionRef, SectionTree};
