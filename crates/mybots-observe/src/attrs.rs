//! Span and event field names for chat instrumentation.
//!
//! Usable as computed field names in the tracing macros:
//! `info_span!("chat", { attrs::BOT_ID } = %bot_id)`.

/// Identifier of the bot being addressed.
pub const BOT_ID: &str = "mybots.bot.id";

/// Client session the exchange belongs to.
pub const SESSION_ID: &str = "mybots.session.id";

/// Persona branch selected from the bot's personality text.
pub const PERSONA: &str = "mybots.persona";

/// Classification of the incoming message (greeting, question, statement).
pub const MESSAGE_KIND: &str = "mybots.message.kind";
