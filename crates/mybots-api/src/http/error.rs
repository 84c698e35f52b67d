//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use mybots_types::error::{BotError, ValidationError};

use crate::http::response::{ApiResponse, RequestMeta};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Bot(BotError),
}

impl From<BotError> for AppError {
    fn from(e: BotError) -> Self {
        AppError::Bot(e)
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Bot(BotError::Validation(e))
    }
}

impl AppError {
    /// Status, machine code, and client-facing message.
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Bot(BotError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "BOT_NOT_FOUND", "Bot not found".to_string())
            }
            AppError::Bot(BotError::IdConflict(id)) => (
                StatusCode::CONFLICT,
                "ID_CONFLICT",
                format!("Bot id '{id}' already exists"),
            ),
            AppError::Bot(BotError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            AppError::Bot(BotError::Storage(e)) => {
                tracing::error!(error = %e, "Bot store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = ApiResponse::error(code, &message, RequestMeta::start());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybots_types::bot::{BotField, BotId};
    use mybots_types::error::StorageError;

    #[test]
    fn status_mapping() {
        let cases = [
            (BotError::NotFound(BotId::new("x")), StatusCode::NOT_FOUND, "BOT_NOT_FOUND"),
            (BotError::IdConflict(BotId::new("x")), StatusCode::CONFLICT, "ID_CONFLICT"),
            (
                BotError::Validation(ValidationError::Required(BotField::Name)),
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
            ),
            (
                BotError::Storage(StorageError::Serialize("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
            ),
        ];
        for (err, status, code) in cases {
            let (got_status, got_code, _) = AppError::from(err).parts();
            assert_eq!(got_status, status);
            assert_eq!(got_code, code);
        }
    }

    #[test]
    fn storage_details_are_hidden() {
        let err = AppError::from(BotError::Storage(StorageError::Corrupt {
            path: "/secret/bots.json".to_string(),
            reason: "eof".to_string(),
        }));
        let (_, _, message) = err.parts();
        assert_eq!(message, "Internal server error");
    }

    #[test]
    fn validation_message_passes_through() {
        let (_, _, message) = AppError::from(ValidationError::EmptyMessage).parts();
        assert_eq!(message, "Message cannot be empty");
    }
}
