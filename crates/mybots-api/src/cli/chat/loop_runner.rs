//! Interactive chat loop.
//!
//! Reads lines from stdin, dispatches slash commands, and sends everything
//! else to the bot through `ChatService`. The loop ends on `/exit` or EOF.

use std::io::Write;

use anyhow::Result;
use console::style;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Instrument;

use mybots_types::bot::BotId;
use mybots_types::chat::{ChatRole, ChatTurn, SessionId};
use mybots_types::error::BotError;

use crate::state::AppState;

use super::banner::print_welcome_banner;
use super::chat_span;
use super::commands::{self, ChatCommand};

fn print_prompt() -> Result<()> {
    print!("{} ", style("you>").green().bold());
    std::io::stdout().flush()?;
    Ok(())
}

fn print_history(turns: &[ChatTurn], bot_name: &str) {
    if turns.is_empty() {
        println!("  {}", style("(no messages yet)").dim());
        return;
    }
    println!();
    for turn in turns {
        let time = turn.timestamp.format("%H:%M:%S");
        match turn.role {
            ChatRole::User => println!(
                "  {} {} {}",
                style(time).dim(),
                style("you:").green().bold(),
                turn.message
            ),
            ChatRole::Bot => println!(
                "  {} {} {}",
                style(time).dim(),
                style(format!("{bot_name}:")).cyan().bold(),
                turn.message
            ),
        }
    }
    println!();
}

/// Run the interactive chat loop for a bot.
pub async fn run_chat_loop(state: &AppState, id: &str) -> Result<()> {
    let bot_id = BotId::new(id);
    let bot = state.bot_service.get_bot(&bot_id).await?;
    let session = SessionId::new();
    let span = chat_span(&bot_id, session, &bot.personality);

    print_welcome_banner(&bot, session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut exchanges = 0usize;

    loop {
        print_prompt()?;
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if let Some(command) = commands::parse(input) {
            match command {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => {
                    state.chat_service.clear_history(session, &bot_id);
                    println!("  {}", style("Conversation cleared.").dim());
                }
                ChatCommand::History => {
                    print_history(&state.chat_service.history(session, &bot_id), &bot.name);
                }
                ChatCommand::Exit => break,
                ChatCommand::Unknown(cmd) => println!(
                    "  {} Unknown command {}. Type /help for a list.",
                    style("!").yellow().bold(),
                    style(cmd).yellow()
                ),
            }
            continue;
        }

        match state
            .chat_service
            .chat(session, &bot_id, input)
            .instrument(span.clone())
            .await
        {
            Ok(reply) => {
                exchanges += 1;
                println!();
                println!("{} {}", style(format!("{}:", reply.bot_name)).cyan().bold(), reply.response);
                println!();
            }
            Err(BotError::Validation(e)) => {
                println!("  {} {e}", style("!").yellow().bold());
            }
            Err(e) => return Err(e.into()),
        }
    }

    tracing::debug!(session_id = %session, exchanges, "Chat loop ended");
    println!(
        "  {} {} exchange{} with {}.",
        style("Goodbye!").bold(),
        exchanges,
        if exchanges == 1 { "" } else { "s" },
        bot.name
    );

    Ok(())
}
