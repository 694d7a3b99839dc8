//! Todo item entity model.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single todo record.
///
/// `todo_id` and `user_id` never change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Owner: the subject that created the item.
    pub user_id: String,
    /// Unique item identifier (UUID v4, stored as text).
    pub todo_id: String,
    /// When the item was created, at millisecond precision so it
    /// survives a round trip through the database unchanged.
    pub created_at: DateTime<Utc>,
    /// Free-text name.
    pub name: String,
    /// Due date exactly as supplied by the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Completion flag.
    #[serde(default)]
    pub done: bool,
    /// Canonical URL of the uploaded attachment, once one was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl TodoItem {
    /// Build a fresh, not-yet-persisted item for `user_id`.
    pub fn new(user_id: impl Into<String>, data: CreateTodo) -> Self {
        Self {
            user_id: user_id.into(),
            todo_id: Uuid::new_v4().to_string(),
            created_at: Utc::now().trunc_subsecs(3),
            name: data.name,
            due_date: data.due_date,
            done: false,
            attachment_url: None,
        }
    }

    /// Check whether `user_id` owns this item.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Data required to create a todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    /// Free-text name.
    pub name: String,
    /// Optional due date.
    #[serde(default)]
    pub due_date: Option<String>,
}

/// The fields an update overwrites. Nothing else on the item changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    /// New name.
    pub name: String,
    /// New due date.
    #[serde(default)]
    pub due_date: Option<String>,
    /// New completion flag.
    pub done: bool,
}
