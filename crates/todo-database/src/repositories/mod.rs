//! Todo store trait and its implementations.

pub mod memory;
pub mod todo;

use async_trait::async_trait;

use todo_core::result::AppResult;
use todo_entity::todo::{TodoItem, UpdateTodo};

pub use memory::MemoryTodoRepository;
pub use todo::PgTodoRepository;

/// Access to the persistent todo table.
///
/// The table is keyed by `todo_id` with a secondary index on `user_id`.
/// Every operation touches a single record or a single owner partition;
/// none of them checks existence or ownership.
#[async_trait]
pub trait TodoStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert or overwrite the full record. Last writer wins.
    async fn put(&self, item: &TodoItem) -> AppResult<()>;

    /// All items owned by `user_id`, in store order.
    async fn query_by_owner(&self, user_id: &str) -> AppResult<Vec<TodoItem>>;

    /// Read a single item by ID.
    async fn find_by_id(&self, todo_id: &str) -> AppResult<Option<TodoItem>>;

    /// Overwrite name, due date and completion flag. A missing ID is a no-op.
    async fn update(&self, todo_id: &str, data: &UpdateTodo) -> AppResult<()>;

    /// Overwrite the attachment URL only. A missing ID is a no-op.
    async fn update_attachment(&self, todo_id: &str, attachment_url: &str) -> AppResult<()>;

    /// Remove the item. Deleting a missing ID succeeds.
    async fn delete(&self, todo_id: &str) -> AppResult<()>;
}
