// src/routes/ask.rs
use axum::{Json, extract::State};

use crate::{
    error::AppError,
    message::{AskQuery, AskResponse},
    services::bartender,
    state::SharedState,
};

pub async fn ask_handler(
    State(state): State<SharedState>,
    Json(query): Json<AskQuery>,
) -> Result<Json<AskResponse>, AppError> {
    let response = bartender::answer(state.drinks.as_ref(), state.model.as_ref(), &query).await?;
    Ok(Json(AskResponse { response }))
}
