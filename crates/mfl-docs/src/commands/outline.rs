//! `mfl-docs outline` command implementation.

use clap::Args;

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Print the outline as JSON.
    #[arg(long)]
    json: bool,
}

impl OutlineArgs {
    /// Execute the outline command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load()?;
        let tree = config.outline();

        if self.json {
            output.print(&serde_json::to_string_pretty(&tree)?)?;
            return Ok(());
        }

        for section in tree.sections() {
            output.highlight(&format!("{}  #{}", section.title, section.id))?;
            for node in &section.children {
                output.print(&format!("  {}  #{}", node.title, node.id))?;
            }
        }
        Ok(())
    }
}
