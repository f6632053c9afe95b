//! `mfl-docs sidebar` command implementation.

use clap::Args;
use mfl_sidebar::{SidebarOptions, SidebarView, render_html};

use super::replay::replay;
use super::{ConfigArgs, parse_event};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// URL fragment present when the page loads.
    #[arg(short, long)]
    fragment: Option<String>,

    /// Events to apply before rendering: select:ID, toggle:ID or fragment:FRAGMENT.
    events: Vec<String>,

    /// Print the view model as JSON instead of HTML.
    #[arg(long)]
    json: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, an event is malformed, or
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let events = self
            .events
            .iter()
            .map(|e| parse_event(e))
            .collect::<Result<Vec<_>, _>>()?;
        let config = self.config.load()?;

        let (nav, _) = replay(&config, self.fragment.as_deref(), &events);
        let options = SidebarOptions {
            link_base: config.site.link_base.clone(),
        };
        let view = SidebarView::build(nav.tree(), nav.state(), &options);

        if self.json {
            output.print(&serde_json::to_string_pretty(&view)?)?;
        } else {
            output.print(render_html(&view).trim_end())?;
        }
        Ok(())
    }
}
