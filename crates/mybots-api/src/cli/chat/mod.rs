//! CLI chat with a bot.
//!
//! `mybots chat <id> --message <text>` sends one message and prints the
//! reply; without `--message` an interactive loop runs
//! (`loop_runner::run_chat_loop`). Each invocation is one session.

pub mod banner;
pub mod commands;
pub mod loop_runner;

use anyhow::Result;
use console::style;
use tracing::Instrument;

use mybots_core::response::Persona;
use mybots_observe::attrs;
use mybots_types::bot::BotId;
use mybots_types::chat::SessionId;

use crate::state::AppState;

/// Span covering one CLI chat session.
pub(crate) fn chat_span(bot_id: &BotId, session: SessionId, personality: &str) -> tracing::Span {
    tracing::info_span!(
        "chat",
        { attrs::BOT_ID } = %bot_id,
        { attrs::SESSION_ID } = %session,
        { attrs::PERSONA } = Persona::detect(personality).as_str(),
    )
}

/// Send a single message and print the reply.
pub async fn send_once(state: &AppState, id: &str, message: &str, json: bool) -> Result<()> {
    let bot_id = BotId::new(id);
    let bot = state.bot_service.get_bot(&bot_id).await?;
    let session = SessionId::new();

    let reply = state
        .chat_service
        .chat(session, &bot_id, message)
        .instrument(chat_span(&bot_id, session, &bot.personality))
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        println!("{} {}", style(format!("{}:", reply.bot_name)).cyan().bold(), reply.response);
    }

    Ok(())
}
