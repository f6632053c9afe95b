//! Built-in outline of the library documentation page.

use crate::section::Section;
use crate::tree::SectionTree;

/// Outline of the memory forensics library documentation page.
///
/// Section ids match the anchors on the rendered page.
pub fn documentation_outline() -> SectionTree {
    SectionTree::from_trusted(vec![
        Section::new("getting-started", "Getting Started")
            .with_child("installation", "Installation")
            .with_child("requirements", "Requirements"),
        Section::new("api", "API Reference")
            .with_child("core-functions", "Core Functions")
            .with_child("mfl-init", "mfl_init()")
            .with_child("mfl-read-memory", "mfl_read_memory()")
            .with_child("mfl-check-integrity", "mfl_check_integrity()")
            .with_child("mfl-cleanup", "mfl_cleanup()"),
        Section::new("examples", "Examples").with_child("basic-usage", "Basic Usage"),
        Section::new("error-codes", "Error Codes"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_outline_is_valid() {
        let tree = documentation_outline();

        let revalidated = SectionTree::new(tree.sections().to_vec());
        assert_eq!(revalidated.as_ref(), Ok(&tree));
    }

    #[test]
    fn test_builtin_outline_starts_with_getting_started() {
        let tree = documentation_outline();

        assert_eq!(tree.first().id, "getting-started");
        assert!(tree.first().has_children());
    }

    #[test]
    fn test_api_functions_nest_under_reference() {
        let tree = documentation_outline();

        let parent = tree.lookup_parent("mfl-read-memory").unwrap();
        assert_eq!(parent.id, "api");
        assert!(!tree.section("error-codes").unwrap().has_children());
    }
}
