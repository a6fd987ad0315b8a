//! Main chat loop orchestration.
//!
//! Coordinates the session lifecycle: welcome banner, lazy connection
//! establishment with retry, the input loop, request dispatch, and history
//! rendering. A failed call discards the connection; the next call re-dials.

use console::style;
use tracing::warn;

use parley_types::wire::{Request, Response};

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::connection::ChatConnection;
use super::input::{ChatInput, InputEvent};
use super::renderer;

/// Run the interactive chat session until the user exits.
pub async fn run_chat_loop(addr: &str, name: &str) -> anyhow::Result<()> {
    print_welcome_banner(addr, name);

    // Dial eagerly so connectivity problems surface before the first
    // message, but keep going on failure; calls re-dial as needed.
    let mut connection = match ChatConnection::connect_with_retry(addr).await {
        Ok(conn) => Some(conn),
        Err(e) => {
            warn!(error = %e, "initial dial failed");
            eprintln!(
                "  {} {e}; will retry on the next message",
                style("!").yellow().bold()
            );
            None
        }
    };

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("bye").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Type 'exit' or press Ctrl+D to quit.").dim());
                continue;
            }
            InputEvent::Message(text) => {
                if text.is_empty() {
                    continue;
                }

                let request = match commands::parse(&text) {
                    Some(ChatCommand::Exit) => {
                        println!("\n  {}", style("bye").dim());
                        break;
                    }
                    Some(ChatCommand::History) => Request::Fetch,
                    None => Request::Post {
                        sender: name.to_string(),
                        text,
                    },
                };

                if connection.is_none() {
                    match ChatConnection::connect_with_retry(addr).await {
                        Ok(conn) => connection = Some(conn),
                        Err(e) => {
                            eprintln!(
                                "  {} cannot connect to server: {e}",
                                style("!").yellow().bold()
                            );
                            continue;
                        }
                    }
                }
                let Some(conn) = connection.as_mut() else {
                    continue;
                };

                match conn.call(&request).await {
                    Ok(Response::History { messages }) => renderer::print_history(&messages),
                    Ok(Response::Error { message }) => {
                        eprintln!(
                            "  {} server rejected request: {message}",
                            style("!").yellow().bold()
                        );
                    }
                    Err(e) => {
                        warn!(error = %e, "call failed; discarding connection");
                        eprintln!(
                            "  {} {e}; reconnecting on the next message",
                            style("!").yellow().bold()
                        );
                        connection = None;
                    }
                }
            }
        }
    }

    Ok(())
}
