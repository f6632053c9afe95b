//! `mfl-docs replay` command implementation.

use std::sync::Arc;

use clap::Args;
use mfl_config::Config;
use mfl_nav::{Effect, NavEvent, NavigationController, NavigationState};
use serde::Serialize;

use super::{ConfigArgs, describe_event, parse_event};
use crate::error::CliError;
use crate::output::Output;
use crate::viewport::ConsoleViewport;

/// Arguments for the replay command.
#[derive(Args)]
pub(crate) struct ReplayArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// URL fragment present when the page loads.
    #[arg(short, long)]
    fragment: Option<String>,

    /// Events to apply in order: select:ID, toggle:ID or fragment:FRAGMENT.
    events: Vec<String>,

    /// Print the steps as JSON.
    #[arg(long)]
    json: bool,
}

/// State after one replayed event.
#[derive(Serialize)]
pub(crate) struct Step {
    event: String,
    state: NavigationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    effect: Option<Effect>,
}

/// Run the page-load fragment and `events` through a fresh controller.
///
/// Returns the controller in its final state and one step per event, the
/// first being the initial state.
pub(crate) fn replay(
    config: &Config,
    fragment: Option<&str>,
    events: &[NavEvent],
) -> (NavigationController<ConsoleViewport>, Vec<Step>) {
    let viewport = ConsoleViewport::new(config.navigation.scroll_behavior);
    let mut nav = NavigationController::new(Arc::new(config.outline()), viewport);

    let mut steps = vec![Step {
        event: "initial".to_owned(),
        state: nav.state().clone(),
        effect: None,
    }];

    let load = fragment.map(|f| NavEvent::FragmentChanged(f.to_owned()));
    for event in load.iter().chain(events) {
        let effect = nav.dispatch(event);
        steps.push(Step {
            event: describe_event(event),
            state: nav.state().clone(),
            effect,
        });
    }

    (nav, steps)
}

impl ReplayArgs {
    /// Execute the replay command.
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

        let (nav, steps) = replay(&config, self.fragment.as_deref(), &events);

        if self.json {
            output.print(&serde_json::to_string_pretty(&steps)?)?;
            return Ok(());
        }

        let behavior = nav.viewport().behavior();
        for step in &steps {
            let expanded: Vec<_> = step
                .state
                .expanded_section_ids()
                .iter()
                .map(String::as_str)
                .collect();
            output.print(&format!(
                "{:<28} active={} expanded=[{}]",
                step.event,
                step.state.active_section_id(),
                expanded.join(", ")
            ))?;
            if let Some(Effect::ScrollTo(id)) = &step.effect {
                output.dim(&format!("{:<28} scroll to #{id} ({behavior})", ""))?;
            }
        }
        tracing::info!(
            events = steps.len() - 1,
            scrolls = nav.viewport().requests(),
            "Replay finished"
        );
        Ok(())
    }
}
