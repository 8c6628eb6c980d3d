//! Request handlers: one storage operation each.

use crate::error::AppError;
use crate::model::TodoPayload;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

pub async fn hello() -> &'static str {
    "Hello World!"
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let todos = state.store.list_all().await?;
    Ok(Json(todos))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<TodoPayload>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.store.create(&payload).await?;
    tracing::debug!(id = todo.id, "created todo");
    let location = format!("/todos/{}", todo.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(todo),
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Ok(Json(todo))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
