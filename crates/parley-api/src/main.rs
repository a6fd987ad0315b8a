//! Parley CLI entry point.
//!
//! Binary name: `parley`
//!
//! Parses CLI arguments, initializes tracing, then dispatches to the chat
//! server or the interactive client.

mod cli;
mod server;

use std::sync::Arc;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use parley_core::handler::ChatHandler;
use parley_core::history::HistoryStore;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,parley_api=debug,parley_core=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Serve { addr } => {
            let handler = Arc::new(ChatHandler::new(Arc::new(HistoryStore::new())));
            server::serve(&addr, handler).await?;
        }

        Commands::Chat { addr, name } => {
            cli::chat::run_chat_loop(&addr, &name).await?;
        }

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "parley", &mut std::io::stdout());
        }
    }

    Ok(())
}
