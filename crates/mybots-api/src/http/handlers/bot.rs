//! Bot CRUD handlers for the REST API.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use mybots_core::repository::bot::BotMap;
use mybots_types::bot::{BotId, BotRecord, CreateBotRequest, UpdateBotRequest};

use crate::http::error::AppError;
use crate::http::response::{ApiResponse, RequestMeta};
use crate::state::AppState;

/// Payload returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedBot {
    pub deleted: bool,
    pub id: BotId,
}

fn bot_link(id: &BotId) -> String {
    format!("/api/bots/{id}")
}

/// GET /api/bots - All bots keyed by id.
pub async fn list_bots(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BotMap>>, AppError> {
    let meta = RequestMeta::start();
    let bots = state.bot_service.list_bots().await?;

    Ok(Json(
        ApiResponse::success(bots, meta).with_link("self", "/api/bots"),
    ))
}

/// POST /api/bots - Create a new bot.
pub async fn create_bot(
    State(state): State<AppState>,
    Json(body): Json<CreateBotRequest>,
) -> Result<Json<ApiResponse<BotRecord>>, AppError> {
    let meta = RequestMeta::start();
    let bot = state.bot_service.create_bot(body).await?;

    let link = bot_link(&bot.id);
    let chat = format!("/api/chat/{}", bot.id);
    Ok(Json(
        ApiResponse::success(bot, meta)
            .with_link("self", &link)
            .with_link("chat", &chat),
    ))
}

/// GET /api/bots/{id} - Get one bot.
pub async fn get_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BotRecord>>, AppError> {
    let meta = RequestMeta::start();
    let id = BotId::new(id);
    let bot = state.bot_service.get_bot(&id).await?;

    Ok(Json(
        ApiResponse::success(bot, meta).with_link("self", &bot_link(&id)),
    ))
}

/// PUT /api/bots/{id} - Overwrite a bot's name, personality, and prompt.
pub async fn update_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBotRequest>,
) -> Result<Json<ApiResponse<BotRecord>>, AppError> {
    let meta = RequestMeta::start();
    let id = BotId::new(id);
    let updated = state.bot_service.update_bot(&id, body).await?;

    Ok(Json(
        ApiResponse::success(updated, meta).with_link("self", &bot_link(&id)),
    ))
}

/// DELETE /api/bots/{id} - Delete a bot permanently.
pub async fn delete_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<DeletedBot>>, AppError> {
    let meta = RequestMeta::start();
    let removed = state.bot_service.delete_bot(&BotId::new(id)).await?;

    Ok(Json(ApiResponse::success(
        DeletedBot {
            deleted: true,
            id: removed.id,
        },
        meta,
    )))
}
