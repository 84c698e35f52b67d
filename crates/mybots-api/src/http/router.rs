//! Axum router configuration with middleware.
//!
//! REST routes live under `/api/`. Middleware: CORS, tracing.
//!
//! When the configured `web_dir` exists it is served at `/`, with unknown
//! paths falling through to its `index.html`. Otherwise `/` returns a small
//! built-in landing page.

use axum::Router;
use axum::response::Html;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use mybots_infra::filesystem::resolve_in_data_dir;

use crate::http::handlers;
use crate::state::AppState;

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>MyBots</title>
</head>
<body>
  <h1>MyBots</h1>
  <p>Create bot personas and chat with them.</p>
  <ul>
    <li><code>GET /api/bots</code> list bots</li>
    <li><code>POST /api/bots</code> create a bot</li>
    <li><code>POST /api/chat/{id}</code> send a message</li>
    <li><code>GET /api/chat/{id}/history</code> session transcript</li>
  </ul>
</body>
</html>
"#;

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Bot CRUD
        .route(
            "/bots",
            get(handlers::bot::list_bots).post(handlers::bot::create_bot),
        )
        .route(
            "/bots/{id}",
            get(handlers::bot::get_bot)
                .put(handlers::bot::update_bot)
                .delete(handlers::bot::delete_bot),
        )
        // Chat
        .route("/chat/{id}", post(handlers::chat::send_message))
        .route("/chat/{id}/history", get(handlers::chat::get_history))
        .route("/chat/{id}/clear", post(handlers::chat::clear_history));

    let web_dir = state
        .config
        .web_dir
        .as_deref()
        .map(|dir| resolve_in_data_dir(&state.data_dir, dir))
        .filter(|dir| dir.is_dir());

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check));

    match web_dir {
        Some(dir) => {
            let serve_dir = ServeDir::new(&dir).fallback(ServeFile::new(dir.join("index.html")));
            router = router.fallback_service(serve_dir);
            tracing::info!(path = %dir.display(), "Static file serving enabled");
        }
        None => {
            router = router.route("/", get(landing_page));
        }
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET / - Built-in landing page.
async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
