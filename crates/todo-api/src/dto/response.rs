//! Response DTOs.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use todo_entity::todo::TodoItem;

use crate::middleware::cors::apply_cors_headers;

/// JSON body carrying the todo CORS headers.
#[derive(Debug, Clone)]
pub struct CorsJson<T> {
    body: T,
    with_credentials: bool,
}

impl<T> CorsJson<T> {
    /// Only `Access-Control-Allow-Origin: *`.
    pub fn new(body: T) -> Self {
        Self {
            body,
            with_credentials: false,
        }
    }

    /// Also `Access-Control-Allow-Credentials: true`.
    pub fn with_credentials(body: T) -> Self {
        Self {
            body,
            with_credentials: true,
        }
    }
}

impl<T: Serialize> IntoResponse for CorsJson<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.body).into_response();
        apply_cors_headers(response.headers_mut(), self.with_credentials);
        response
    }
}

/// `GET /todos` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsResponse {
    pub items: Vec<TodoItem>,
}

/// `POST /todos` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: TodoItem,
}

/// `POST /todos/{todoId}/attachment` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrlResponse {
    pub upload_url: String,
}

/// `{}` returned by update and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}
