//! Welcome banner for the interactive chat session.

use console::style;

/// Print the banner shown when the chat client starts.
pub fn print_welcome_banner(addr: &str, name: &str) {
    println!();
    println!(
        "  {} {}",
        style("parley").cyan().bold(),
        style(format!("@ {addr}")).dim()
    );
    println!("  {}", style(format!("Chatting as {name}")).dim());
    println!();
    println!(
        "  {}",
        style("Type a message and press Enter. 'history' fetches the log, 'exit' quits.").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
