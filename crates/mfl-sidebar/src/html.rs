//! HTML rendering of the sidebar view.

use std::fmt::Write;

use crate::view::{SidebarItem, SidebarLink, SidebarView};

/// Chevron icon shown on expandable sections.
const CHEVRON_PATH: &str = "M7.293 14.707a1 1 0 010-1.414L10.586 10 7.293 6.707a1 1 0 \
                            011.414-1.414l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414 0z";

/// Render the sidebar navigation tree.
///
/// Collapsed sections render no child list. The highlighted entry carries
/// `aria-current="true"`, expandable sections an `aria-expanded` toggle
/// button with a `data-toggle` hook.
pub fn render_html(view: &SidebarView) -> String {
    let mut html = String::with_capacity(2048);
    html.push_str("<nav class=\"docs-sidebar\" aria-label=\"Documentation\">\n<ul>\n");
    for item in &view.items {
        render_item(&mut html, item);
    }
    html.push_str("</ul>\n</nav>\n");
    html
}

fn render_item(html: &mut String, item: &SidebarItem) {
    let _ = writeln!(html, "<li data-section-id=\"{}\">", escape(&item.id));
    html.push_str("<div class=\"flex items-center\">\n");

    if item.expandable {
        let rotate = if item.expanded { " rotate-90" } else { "" };
        let _ = writeln!(
            html,
            "<button type=\"button\" class=\"w-5 h-5 flex items-center justify-center \
             text-gray-500 mr-0.5\" aria-expanded=\"{}\" aria-controls=\"nav-{}\" \
             data-toggle=\"{}\">",
            item.expanded,
            escape(&item.id),
            escape(&item.id),
        );
        let _ = writeln!(
            html,
            "<svg class=\"w-3.5 h-3.5{rotate}\" fill=\"currentColor\" viewBox=\"0 0 20 20\">\n\
             <path fill-rule=\"evenodd\" d=\"{CHEVRON_PATH}\" clip-rule=\"evenodd\"/>\n</svg>",
        );
        html.push_str("</button>\n");
    } else {
        html.push_str("<span class=\"w-[22px]\"></span>\n");
    }

    let highlight = item.active || item.contains_active;
    render_anchor(html, &item.href, &item.id, &item.title, item.active, highlight);
    html.push_str("</div>\n");

    if !item.children.is_empty() {
        let _ = writeln!(html, "<ul id=\"nav-{}\" class=\"ml-3\">", escape(&item.id));
        for child in &item.children {
            render_child(html, child);
        }
        html.push_str("</ul>\n");
    }

    html.push_str("</li>\n");
}

fn render_child(html: &mut String, child: &SidebarLink) {
    let _ = writeln!(html, "<li data-section-id=\"{}\">", escape(&child.id));
    render_anchor(
        html,
        &child.href,
        &child.id,
        &child.title,
        child.active,
        child.active,
    );
    html.push_str("</li>\n");
}

fn render_anchor(
    html: &mut String,
    href: &str,
    id: &str,
    title: &str,
    current: bool,
    highlight: bool,
) {
    let classes = if highlight {
        "text-blue-700 font-medium"
    } else {
        "text-gray-700 hover:text-gray-900"
    };
    let aria = if current { " aria-current=\"true\"" } else { "" };
    let _ = writeln!(
        html,
        "<a href=\"{}\" data-select=\"{}\" \
         class=\"block flex-1 py-1.5 px-1.5 rounded text-sm {}\"{}>{}</a>",
        escape(href),
        escape(id),
        classes,
        aria,
        escape(title),
    );
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use mfl_nav::{NavEvent, NavigationState, reduce};
    use mfl_outline::{Section, SectionTree, documentation_outline};

    use super::*;
    use crate::view::SidebarOptions;

    fn render(tree: &SectionTree, state: &NavigationState) -> String {
        render_html(&SidebarView::build(tree, state, &SidebarOptions::default()))
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#x27;");
    }

    #[test]
    fn test_initial_render_shows_first_section_children() {
        let tree = documentation_outline();
        let html = render(&tree, &NavigationState::initial(&tree));

        assert!(html.starts_with("<nav class=\"docs-sidebar\""));
        assert!(html.contains("<ul id=\"nav-getting-started\" class=\"ml-3\">"));
        assert!(html.contains("href=\"#installation\""));
        assert!(!html.contains("href=\"#mfl-init\""));
        assert!(html.contains("aria-expanded=\"true\" aria-controls=\"nav-getting-started\""));
        assert!(html.contains("aria-expanded=\"false\" aria-controls=\"nav-api\""));
    }

    #[test]
    fn test_active_entry_has_aria_current() {
        let tree = documentation_outline();
        let state = reduce(
            &tree,
            &NavigationState::initial(&tree),
            &NavEvent::FragmentChanged("#mfl-cleanup".to_owned()),
        )
        .state;

        let html = render(&tree, &state);

        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert!(html.contains(
            "data-select=\"mfl-cleanup\" class=\"block flex-1 py-1.5 px-1.5 rounded text-sm \
             text-blue-700 font-medium\" aria-current=\"true\">mfl_cleanup()</a>"
        ));
    }

    #[test]
    fn test_leaf_section_renders_spacer() {
        let tree = SectionTree::new(vec![Section::new("only", "Only")]).unwrap();

        let html = render(&tree, &NavigationState::initial(&tree));

        assert!(html.contains("<span class=\"w-[22px]\"></span>"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let tree = SectionTree::new(vec![Section::new("x", "<script>")]).unwrap();

        let html = render(&tree, &NavigationState::initial(&tree));

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
