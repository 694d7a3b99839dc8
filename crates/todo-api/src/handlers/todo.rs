//! Todo CRUD and attachment handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::request::{CreateTodoRequest, UpdateTodoRequest};
use crate::dto::response::{
    CorsJson, EmptyResponse, ItemResponse, ItemsResponse, UploadUrlResponse,
};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/todos
pub async fn list_todos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<CorsJson<ItemsResponse>, ApiError> {
    let items = state.todo_service.list_todos(&auth).await?;
    Ok(CorsJson::new(ItemsResponse { items }))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTodoRequest>,
) -> Result<CorsJson<ItemResponse>, ApiError> {
    let item = state.todo_service.create_todo(&auth, req).await?;
    Ok(CorsJson::with_credentials(ItemResponse { item }))
}

/// PATCH /api/todos/{todo_id}
pub async fn update_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<CorsJson<EmptyResponse>, ApiError> {
    state.todo_service.update_todo(&auth, &todo_id, req).await?;
    Ok(CorsJson::with_credentials(EmptyResponse {}))
}

/// DELETE /api/todos/{todo_id}
pub async fn delete_todo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<String>,
) -> Result<CorsJson<EmptyResponse>, ApiError> {
    state.todo_service.delete_todo(&auth, &todo_id).await?;
    Ok(CorsJson::new(EmptyResponse {}))
}

/// POST /api/todos/{todo_id}/attachment
pub async fn generate_upload_url(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(todo_id): Path<String>,
) -> Result<CorsJson<UploadUrlResponse>, ApiError> {
    let upload_url = state
        .todo_service
        .generate_upload_url(&auth, &todo_id)
        .await?;
    Ok(CorsJson::with_credentials(UploadUrlResponse { upload_url }))
}
