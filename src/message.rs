// src/message.rs
use serde::{Deserialize, Serialize};

/// Body accepted by `POST /ask`.
#[derive(Debug, Clone, Deserialize)]
pub struct AskQuery {
    pub message: String,
    #[serde(default)]
    pub ingredient: Option<String>,
}

/// Body returned by `POST /ask`, for both answers and "not found" replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

/// What the submit handler sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub message: String,
}

/// What the submit handler reads back. `response` is optional so that a
/// well-formed body without it is not treated as a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AskReply {
    #[serde(default)]
    pub response: Option<String>,
}
