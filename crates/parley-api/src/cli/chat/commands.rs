//! Session control token parsing for the chat loop.
//!
//! Two literal tokens are reserved: `history` fetches the log without
//! posting, `exit` ends the session. Everything else is sent as a message.

/// Control tokens recognized by the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Fetch the full history without posting.
    History,
    /// End the chat session.
    Exit,
}

/// Parse user input as a control token.
///
/// Returns `None` if the input is an ordinary message.
pub fn parse(input: &str) -> Option<ChatCommand> {
    match input.trim() {
        "history" => Some(ChatCommand::History),
        "exit" => Some(ChatCommand::Exit),
        _ => None,
    }
}
