//! History rendering for the chat loop.

use console::style;

use parley_types::history::ENTRY_SEPARATOR;

/// Print the full history between framing rules.
///
/// Each entry is `"<sender>: <text>"`; the sender prefix is styled when the
/// separator is found, otherwise the entry is printed as-is.
pub fn print_history(messages: &[String]) {
    println!("  {}", style("--- Chat history ---").dim());
    for entry in messages {
        match entry.split_once(ENTRY_SEPARATOR) {
            Some((sender, text)) => {
                println!("  {} {}", style(format!("{sender}:")).cyan().bold(), text);
            }
            None => println!("  {entry}"),
        }
    }
    println!("  {}", style("--------------------").dim());
}
