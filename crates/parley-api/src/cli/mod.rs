//! CLI command definitions for the `parley` binary.
//!
//! Uses clap derive macros for argument parsing. Two modes: `serve` runs
//! the history server, `chat` runs the interactive client.

pub mod chat;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Minimal networked chat: a central history server and a line client.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the chat history server.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "PARLEY_ADDR", default_value = "127.0.0.1:1234")]
        addr: String,
    },

    /// Start an interactive chat session against a server.
    Chat {
        /// Server address to connect to.
        #[arg(long, env = "PARLEY_ADDR", default_value = "127.0.0.1:1234")]
        addr: String,

        /// Display name attached to posted messages.
        #[arg(long, env = "PARLEY_NAME", default_value = "anon")]
        name: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
