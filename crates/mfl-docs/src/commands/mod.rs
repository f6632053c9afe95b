//! CLI command implementations.

pub(crate) mod outline;
pub(crate) mod replay;
pub(crate) mod sidebar;

pub(crate) use outline::OutlineArgs;
pub(crate) use replay::ReplayArgs;
pub(crate) use sidebar::SidebarArgs;

use std::path::PathBuf;

use clap::Args;
use mfl_config::{CliSettings, Config, ScrollBehavior};
use mfl_nav::NavEvent;

use crate::error::CliError;

/// Configuration arguments shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover mfl-docs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Prefix for sidebar links (overrides config).
    #[arg(long, env = "MFL_DOCS_LINK_BASE")]
    link_base: Option<String>,

    /// Scroll without animation (overrides config).
    #[arg(long)]
    instant_scroll: bool,
}

impl ConfigArgs {
    /// Load config with CLI overrides applied.
    pub(crate) fn load(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            link_base: self.link_base.clone(),
            scroll_behavior: self.instant_scroll.then_some(ScrollBehavior::Instant),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }
}

/// Parse an event of the form `select:ID`, `toggle:ID` or `fragment:FRAGMENT`.
///
/// The id is not checked against the outline: unknown ids are absorbed by
/// the navigation state machine, as they would be in the browser.
pub(crate) fn parse_event(input: &str) -> Result<NavEvent, CliError> {
    let invalid = |reason| CliError::Event {
        input: input.to_owned(),
        reason,
    };

    let (kind, value) = input
        .split_once(':')
        .ok_or_else(|| invalid("expected KIND:VALUE"))?;
    let value = value.to_owned();
    match kind {
        "select" | "s" => Ok(NavEvent::SelectSection(value)),
        "toggle" | "t" => Ok(NavEvent::ToggleExpansion(value)),
        "fragment" | "f" => Ok(NavEvent::FragmentChanged(value)),
        _ => Err(invalid("kind must be select, toggle or fragment")),
    }
}

/// Render an event back into its command line form.
pub(crate) fn describe_event(event: &NavEvent) -> String {
    match event {
        NavEvent::SelectSection(id) => format!("select:{id}"),
        NavEvent::ToggleExpansion(id) => format!("toggle:{id}"),
        NavEvent::FragmentChanged(fragment) => format!("fragment:{fragment}"),
    }
}
