//! Welcome banner display for chat sessions.

use console::style;

use mybots_core::response::Persona;
use mybots_types::bot::BotRecord;
use mybots_types::chat::SessionId;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(bot: &BotRecord, session: SessionId) {
    let session_id = session.to_string();

    println!();
    println!("  {}", style(&bot.name).cyan().bold());
    println!("  {}", style(&bot.personality).dim());
    println!();
    println!(
        "  {}  {}",
        style("Persona:").bold(),
        style(Persona::detect(&bot.personality).as_str()).dim()
    );
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, /exit or Ctrl+D to leave").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
