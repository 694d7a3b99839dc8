//! In-memory todo store backed by a concurrent map.
//!
//! Mirrors the PostgreSQL semantics: upsert on put, no-op updates on
//! missing IDs, idempotent deletes. Test double only: the server always
//! runs against [`PgTodoRepository`](super::PgTodoRepository).

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use todo_core::result::AppResult;
use todo_entity::todo::{TodoItem, UpdateTodo};

use super::TodoStore;

/// In-memory todo store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTodoRepository {
    /// todo_id → item.
    items: Arc<DashMap<String, TodoItem>>,
}

impl MemoryTodoRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoRepository {
    async fn put(&self, item: &TodoItem) -> AppResult<()> {
        self.items.insert(item.todo_id.clone(), item.clone());
        Ok(())
    }

    async fn query_by_owner(&self, user_id: &str) -> AppResult<Vec<TodoItem>> {
        Ok(self
            .items
            .iter()
            .filter(|entry| entry.value().user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_by_id(&self, todo_id: &str) -> AppResult<Option<TodoItem>> {
        Ok(self.items.get(todo_id).map(|entry| entry.value().clone()))
    }

    async fn update(&self, todo_id: &str, data: &UpdateTodo) -> AppResult<()> {
        match self.items.get_mut(todo_id) {
            Some(mut entry) => {
                let item = entry.value_mut();
                item.name = data.name.clone();
                item.due_date = data.due_date.clone();
                item.done = data.done;
            }
            None => debug!(todo_id, "Update for missing todo ignored"),
        }
        Ok(())
    }

    async fn update_attachment(&self, todo_id: &str, attachment_url: &str) -> AppResult<()> {
        match self.items.get_mut(todo_id) {
            Some(mut entry) => entry.value_mut().attachment_url = Some(attachment_url.to_string()),
            None => debug!(todo_id, "Attachment update for missing todo ignored"),
        }
        Ok(())
    }

    async fn delete(&self, todo_id: &str) -> AppResult<()> {
        self.items.remove(todo_id);
        Ok(())
    }
}
