//! Chat handlers: send a message, read or clear the session transcript.
//!
//! Transcripts are scoped to the caller's session (see
//! [`ClientSession`]); a first request without a session gets one minted
//! and returned as a cookie.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::Instrument;

use mybots_core::response::classify_message;
use mybots_observe::attrs;
use mybots_types::bot::BotId;
use mybots_types::chat::{ChatRequest, ChatTurn};

use crate::http::error::AppError;
use crate::http::extractors::session::ClientSession;
use crate::http::response::{ApiResponse, RequestMeta};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Cleared {
    pub cleared: bool,
}

/// POST /api/chat/{id} - Send a message and get the bot's reply.
pub async fn send_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
    session: ClientSession,
    Json(body): Json<ChatRequest>,
) -> Result<Response, AppError> {
    let meta = RequestMeta::start();
    let bot_id = BotId::new(id);

    let span = tracing::info_span!(
        "chat",
        { attrs::BOT_ID } = %bot_id,
        { attrs::SESSION_ID } = %session.id,
        { attrs::MESSAGE_KIND } = classify_message(&body.message).as_str(),
    );
    let reply = state
        .chat_service
        .chat(session.id, &bot_id, &body.message)
        .instrument(span)
        .await?;

    let history = format!("/api/chat/{bot_id}/history");
    let resp = ApiResponse::success(reply, meta).with_link("history", &history);
    Ok(session.attach(Json(resp).into_response(), state.config.session_lifetime_secs))
}

/// GET /api/chat/{id}/history - Transcript for this session and bot.
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    session: ClientSession,
) -> Response {
    let meta = RequestMeta::start();
    let turns: Vec<ChatTurn> = state.chat_service.history(session.id, &BotId::new(id));

    let resp = ApiResponse::success(turns, meta);
    session.attach(Json(resp).into_response(), state.config.session_lifetime_secs)
}

/// POST /api/chat/{id}/clear - Drop this session's transcript for the bot.
pub async fn clear_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    session: ClientSession,
) -> Response {
    let meta = RequestMeta::start();
    state.chat_service.clear_history(session.id, &BotId::new(id));

    let resp = ApiResponse::success(Cleared { cleared: true }, meta);
    session.attach(Json(resp).into_response(), state.config.session_lifetime_secs)
}
