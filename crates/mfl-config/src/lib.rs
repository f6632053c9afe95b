//! Configuration management for the mfl docs site.
//!
//! Parses `mfl-docs.toml` with serde and searches parent directories for it
//! when no explicit path is given. CLI settings are applied on top of the
//! loaded values via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `site.link_base` supports `${VAR}` (errors if unset) and
//! `${VAR:-default}`.
//!
//! ## Custom Outline
//!
//! An `[[outline.sections]]` array replaces the built-in documentation
//! outline. It is validated at load time with the same rules as
//! [`SectionTree::new`].

mod expand;

use std::fmt;
use std::path::{Path, PathBuf};

use mfl_outline::{OutlineError, Section, SectionTree, documentation_outline};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mfl-docs.toml";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the link base.
    pub link_base: Option<String>,
    /// Override the scroll behavior.
    pub scroll_behavior: Option<ScrollBehavior>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Navigation configuration.
    pub navigation: NavigationConfig,
    /// Outline override as parsed from TOML.
    outline: OutlineConfigRaw,

    /// Validated outline override (set after loading).
    #[serde(skip)]
    outline_resolved: Option<SectionTree>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Prefix for sidebar links, placed before `#section-id`.
    pub link_base: String,
}

/// How the viewport animates scroll requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    /// Animated scroll.
    #[default]
    Smooth,
    /// Jump without animation.
    Instant,
}

impl fmt::Display for ScrollBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smooth => f.write_str("smooth"),
            Self::Instant => f.write_str("instant"),
        }
    }
}

/// Navigation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Scroll behavior requested from the viewport.
    pub scroll_behavior: ScrollBehavior,
}

/// Raw outline configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OutlineConfigRaw {
    sections: Option<Vec<Section>>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Invalid custom outline.
    #[error("Invalid outline: {0}")]
    Outline(#[from] OutlineError),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.link_base`").
        field: String,
        /// Error message (e.g., "${`MFL_DOCS_BASE`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `mfl-docs.toml` in the current directory and its parents, falling
    /// back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist, parsing or
    /// expansion fails, or the custom outline is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from TOML text.
    ///
    /// Expands environment variables and validates the outline, but does not
    /// record a config path.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or outline validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_outline()?;
        Ok(config)
    }

    /// Outline the site navigates: the configured one, or the built-in
    /// documentation outline.
    pub fn outline(&self) -> SectionTree {
        self.outline_resolved
            .clone()
            .unwrap_or_else(documentation_outline)
    }

    /// Whether the outline comes from the config file.
    pub fn has_custom_outline(&self) -> bool {
        self.outline_resolved.is_some()
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(link_base) = &settings.link_base {
            self.site.link_base.clone_from(link_base);
        }
        if let Some(scroll_behavior) = settings.scroll_behavior {
            self.navigation.scroll_behavior = scroll_behavior;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.link_base = expand::expand_env(&self.site.link_base, "site.link_base")?;
        Ok(())
    }

    /// Validate the custom outline, if any.
    fn resolve_outline(&mut self) -> Result<(), ConfigError> {
        self.outline_resolved = match self.outline.sections.take() {
            Some(sections) => Some(SectionTree::new(sections)?),
            None => None,
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.site.link_base, "");
        assert_eq!(config.navigation.scroll_behavior, ScrollBehavior::Smooth);
        assert!(!config.has_custom_outline());
        assert_eq!(config.outline(), documentation_outline());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.site.link_base, "");
        assert!(!config.has_custom_outline());
    }

    #[test]
    fn test_parse_site_and_navigation() {
        let toml = r#"
[site]
link_base = "/documentation"

[navigation]
scroll_behavior = "instant"
"#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(config.site.link_base, "/documentation");
        assert_eq!(config.navigation.scroll_behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn test_unknown_scroll_behavior_rejected() {
        let toml = r#"
[navigation]
scroll_behavior = "bouncy"
"#;
        let err = Config::from_toml(toml).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_parse_custom_outline() {
        let toml = r#"
[[outline.sections]]
id = "intro"
title = "Intro"
children = [
    { id = "setup", title = "Setup" },
    { id = "usage", title = "Usage" },
]

[[outline.sections]]
id = "faq"
title = "FAQ"
"#;
        let config = Config::from_toml(toml).unwrap();
        let outline = config.outline();

        assert!(config.has_custom_outline());
        let ids: Vec<_> = outline.ids().collect();
        assert_eq!(ids, vec!["intro", "setup", "usage", "faq"]);
        assert_eq!(outline.lookup_parent("usage").map(|s| s.id.as_str()), Some("intro"));
    }

    #[test]
    fn test_invalid_custom_outline_rejected() {
        let toml = r#"
[[outline.sections]]
id = "intro"
title = "Intro"
children = [{ id = "intro", title = "Again" }]
"#;
        let err = Config::from_toml(toml).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Outline(OutlineError::DuplicateId(ref id)) if id == "intro"
        ));
        assert!(err.to_string().contains("duplicate section id"));
    }

    #[test]
    fn test_empty_custom_outline_rejected() {
        let toml = "[outline]\nsections = []\n";

        let err = Config::from_toml(toml).unwrap_err();

        assert!(matches!(err, ConfigError::Outline(OutlineError::Empty)));
    }

    #[test]
    fn test_expand_env_vars_link_base() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("MFL_CONFIG_TEST_BASE", "/manual");
        }
        let toml = r#"
[site]
link_base = "${MFL_CONFIG_TEST_BASE}/docs"
"#;
        let config = Config::from_toml(toml).unwrap();

        assert_eq!(config.site.link_base, "/manual/docs");
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        let toml = r#"
[site]
link_base = "${MFL_CONFIG_TEST_MISSING}"
"#;
        let err = Config::from_toml(toml).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("site.link_base"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            link_base: Some("/docs".to_owned()),
            scroll_behavior: Some(ScrollBehavior::Instant),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.site.link_base, "/docs");
        assert_eq!(config.navigation.scroll_behavior, ScrollBehavior::Instant);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::from_toml("[site]\nlink_base = \"/x\"\n").unwrap();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.link_base, "/x");
        assert_eq!(config.navigation.scroll_behavior, ScrollBehavior::Smooth);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\nlink_base = \"/documentation\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.link_base, "/documentation");
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_explicit_path_with_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site]\nlink_base = \"/documentation\"\n").unwrap();
        let settings = CliSettings {
            link_base: Some("/preview".to_owned()),
            ..Default::default()
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.site.link_base, "/preview");
    }

    #[test]
    fn test_load_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[site\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_scroll_behavior_display() {
        assert_eq!(ScrollBehavior::Smooth.to_string(), "smooth");
        assert_eq!(ScrollBehavior::Instant.to_string(), "instant");
    }
}
