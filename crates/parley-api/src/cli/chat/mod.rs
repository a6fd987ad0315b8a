//! Interactive chat session against a Parley server.
//!
//! Modules mirror the session lifecycle: welcome banner, input handling,
//! command parsing, connection management with retry, history rendering,
//! and the loop tying them together.

mod banner;
pub mod commands;
pub(crate) mod connection;
mod input;
mod loop_runner;
mod renderer;

pub use loop_runner::run_chat_loop;
