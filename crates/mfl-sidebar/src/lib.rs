//! Sidebar presentation for the mfl docs site.
//!
//! Turns an outline plus the current navigation state into a
//! [`SidebarView`] (what to highlight, which children to draw) and renders
//! it to HTML with [`render_html`].

mod html;
mod view;

pub use html::render_html;
pub use view::{SidebarItem, SidebarLink, SidebarOptions, SidebarView};
