//! Client session extractor.
//!
//! Identifies the caller's session from:
//! - `X-Session-Id: <uuid>` header
//! - `mybots_session=<uuid>` cookie
//!
//! A request carrying neither (or an unparsable id) gets a freshly minted
//! session, which handlers hand back to the client via [`ClientSession::attach`].

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;

use mybots_types::chat::SessionId;

use crate::state::AppState;

pub const SESSION_COOKIE: &str = "mybots_session";
pub const SESSION_HEADER: &str = "x-session-id";

/// The session a request belongs to.
#[derive(Debug, Clone, Copy)]
pub struct ClientSession {
    pub id: SessionId,
    /// True when no valid session id came with the request.
    pub is_new: bool,
}

impl FromRequestParts<AppState> for ClientSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(match session_from_headers(&parts.headers) {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: SessionId::new(),
                is_new: true,
            },
        })
    }
}

impl ClientSession {
    /// Add a `Set-Cookie` for a newly minted session to `response`.
    pub fn attach(&self, mut response: Response, lifetime_secs: u64) -> Response {
        if self.is_new {
            let cookie = format!(
                "{SESSION_COOKIE}={}; Path=/; Max-Age={lifetime_secs}; HttpOnly; SameSite=Lax",
                self.id
            );
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(SET_COOKIE, value);
                }
                Err(e) => tracing::warn!("Could not encode session cookie: {e}"),
            }
        }
        response
    }
}

/// Read the session id from the header first, then the cookie.
fn session_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    let from_header = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok());
    if from_header.is_some() {
        return from_header;
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| value.trim().parse().ok())
}
