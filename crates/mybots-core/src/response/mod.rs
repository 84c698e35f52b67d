//! Rule-based response engine.
//!
//! Replies are chosen by two independent classifications: the bot's
//! personality text selects a [`Persona`] branch, and the incoming message
//! selects a [`MessageKind`] within that branch. The matching template
//! interpolates the bot name, the raw message, and a prefix of the bot's
//! prompt.
//!
//! The engine is a pure synchronous function: no randomness, no I/O, no
//! hidden state. Identical inputs always produce identical output.

pub mod classify;
pub mod persona;
pub mod template;

use mybots_types::bot::BotRecord;
use mybots_types::chat::ChatTurn;

pub use classify::{MessageKind, classify_message};
pub use persona::Persona;

/// Generate the bot's reply to `message`.
///
/// `_transcript` is the conversation so far (including the user turn being
/// answered). The current rules do not consult it.
pub fn generate_response(bot: &BotRecord, message: &str, _transcript: &[ChatTurn]) -> String {
    let persona = Persona::detect(&bot.personality);
    let kind = classify_message(message);
    template::render(persona, kind, &bot.name, message, &bot.prompt)
}
