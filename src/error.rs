// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::AskResponse;

/// Errors raised while answering `/ask`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Nothing matched the lookup. The message is shown to the user as-is.
    #[error("{0}")]
    NotFound(String),

    #[error("cocktail database request failed: {0}")]
    CocktailDb(#[source] reqwest::Error),

    #[error("chat model request failed: {0}")]
    ChatModel(#[source] reqwest::Error),

    #[error("chat model returned no choices")]
    EmptyCompletion,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(AskResponse { response: message }),
            )
                .into_response(),
            // Plain text body; only NotFound carries a `response` field.
            other => {
                tracing::error!(error = %other, "ask failed");
                (StatusCode::BAD_GATEWAY, other.to_string()).into_response()
            }
        }
    }
}

/// Errors seen by the submit handler's transport.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
