//! Request DTOs.

use serde::{Deserialize, Serialize};

pub use todo_entity::todo::{CreateTodo as CreateTodoRequest, UpdateTodo as UpdateTodoRequest};

/// Token-authorizer event as sent by an API gateway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerEvent {
    /// Event type, `"TOKEN"` for bearer-token authorizers.
    #[serde(default, rename = "type")]
    pub event_type: String,
    /// Raw `Authorization` header value.
    #[serde(default)]
    pub authorization_token: Option<String>,
    /// ARN of the invoked method.
    #[serde(default)]
    pub method_arn: String,
}
