//! Unified error handling for the server.
//!
//! Provides a single error type that maps to HTTP responses. Engine
//! rule violations surface as 409 with their kind; malformed input is
//! 400; unresolved ids are 404. Unexpected errors are logged at the
//! boundary and surfaced as a generic 500.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use engine::EngineError;

/// Application error type with HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing request fields (400).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Auction/player/team id unresolved (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Auction rule violation (409).
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error kind surfaced to clients alongside the message.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::NotFound(_) => "NotFound",
            AppError::Engine(e) => match e {
                EngineError::NotLive => "NotLive",
                EngineError::PlayerMismatch { .. } => "PlayerMismatch",
                EngineError::PlayerNotInAuction(_) => "PlayerNotInAuction",
                EngineError::PlayerAlreadySold(_) => "PlayerAlreadySold",
                EngineError::NoAvailablePlayers => "NoAvailablePlayers",
                EngineError::NoBidPlaced => "NoBidPlaced",
                EngineError::InvalidTransition { .. } => "InvalidTransition",
            },
            AppError::Internal(_) => "Internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Engine(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error in request handler");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = axum::Json(json!({
            "error": message,
            "kind": self.kind(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

/// JSON body extractor whose rejection is an [`AppError`], so a
/// malformed or missing body gets the same `{error, kind, status}`
/// shape as every other failure instead of axum's plain-text 422.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::InvalidInput(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::NotFound("Auction#9".into());
        assert_eq!(err.to_string(), "not found: Auction#9");
    }

    #[test]
    fn test_engine_error_kinds() {
        assert_eq!(AppError::from(EngineError::NotLive).kind(), "NotLive");
        assert_eq!(
            AppError::from(EngineError::NoBidPlaced).kind(),
            "NoBidPlaced"
        );
        assert_eq!(
            AppError::from(EngineError::NoAvailablePlayers).kind(),
            "NoAvailablePlayers"
        );
    }

    #[tokio::test]
    async fn test_malformed_body_rejects_as_invalid_input() {
        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(r#"{"auctionId":"#))
            .unwrap();

        let err = AppJson::<serde_json::Value>::from_request(req, &())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::from(EngineError::NotLive).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
