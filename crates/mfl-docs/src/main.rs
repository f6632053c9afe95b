//! mfl-docs CLI - section navigation for the mfl documentation page.
//!
//! Provides commands for:
//! - `outline`: Print the documentation outline
//! - `replay`: Replay navigation events and print each resulting state
//! - `sidebar`: Render the sidebar for a navigation state

mod commands;
mod error;
mod output;
mod viewport;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{OutlineArgs, ReplayArgs, SidebarArgs};
use output::Output;

/// mfl-docs - Documentation navigation tools.
#[derive(Parser)]
#[command(name = "mfl-docs", version, about)]
struct Cli {
    /// Enable verbose output (navigation transitions and scroll requests).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the documentation outline.
    Outline(OutlineArgs),
    /// Replay navigation events and print each resulting state.
    Replay(ReplayArgs),
    /// Render the sidebar after applying navigation events.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Outline(args) => args.execute(),
        Commands::Replay(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
