//! PostgreSQL todo repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use todo_core::config::TodosConfig;
use todo_core::error::{AppError, ErrorKind};
use todo_core::result::AppResult;
use todo_entity::todo::{TodoItem, UpdateTodo};

use super::TodoStore;

/// Repository for todo CRUD operations against PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
    /// Validated table name from configuration.
    table: String,
}

impl PgTodoRepository {
    /// Create a new todo repository over the configured table.
    pub fn new(pool: PgPool, config: &TodosConfig) -> Self {
        Self {
            pool,
            table: config.table.clone(),
        }
    }
}

#[async_trait]
impl TodoStore for PgTodoRepository {
    async fn put(&self, item: &TodoItem) -> AppResult<()> {
        let sql = put_sql(&self.table);

        sqlx::query(&sql)
            .bind(&item.todo_id)
            .bind(&item.user_id)
            .bind(item.created_at)
            .bind(&item.name)
            .bind(&item.due_date)
            .bind(item.done)
            .bind(&item.attachment_url)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to put todo", e))?;
        Ok(())
    }

    async fn query_by_owner(&self, user_id: &str) -> AppResult<Vec<TodoItem>> {
        let sql = select_sql(&self.table, "user_id");

        sqlx::query_as::<_, TodoItem>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query todos", e))
    }

    async fn find_by_id(&self, todo_id: &str) -> AppResult<Option<TodoItem>> {
        let sql = select_sql(&self.table, "todo_id");

        sqlx::query_as::<_, TodoItem>(&sql)
            .bind(todo_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find todo", e))
    }

    async fn update(&self, todo_id: &str, data: &UpdateTodo) -> AppResult<()> {
        let sql = update_sql(&self.table);

        sqlx::query(&sql)
            .bind(todo_id)
            .bind(&data.name)
            .bind(&data.due_date)
            .bind(data.done)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update todo", e))?;
        Ok(())
    }

    async fn update_attachment(&self, todo_id: &str, attachment_url: &str) -> AppResult<()> {
        let sql = update_attachment_sql(&self.table);

        sqlx::query(&sql)
            .bind(todo_id)
            .bind(attachment_url)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update attachment URL", e)
            })?;
        Ok(())
    }

    async fn delete(&self, todo_id: &str) -> AppResult<()> {
        let sql = delete_sql(&self.table);

        sqlx::query(&sql)
            .bind(todo_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete todo", e))?;
        Ok(())
    }
}

/// Insert-or-replace keyed on `todo_id`; binds all seven columns in
/// declaration order.
fn put_sql(table: &str) -> String {
    format!(
        "INSERT INTO {table} (todo_id, user_id, created_at, name, due_date, done, attachment_url) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) \
         ON CONFLICT (todo_id) DO UPDATE SET \
            user_id = EXCLUDED.user_id, \
            created_at = EXCLUDED.created_at, \
            name = EXCLUDED.name, \
            due_date = EXCLUDED.due_date, \
            done = EXCLUDED.done, \
            attachment_url = EXCLUDED.attachment_url"
    )
}

fn select_sql(table: &str, key: &str) -> String {
    format!("SELECT * FROM {table} WHERE {key} = $1")
}

/// Overwrites the three client-editable columns only.
fn update_sql(table: &str) -> String {
    format!("UPDATE {table} SET name = $2, due_date = $3, done = $4 WHERE todo_id = $1")
}

fn update_attachment_sql(table: &str) -> String {
    format!("UPDATE {table} SET attachment_url = $2 WHERE todo_id = $1")
}

fn delete_sql(table: &str) -> String {
    format!("DELETE FROM {table} WHERE todo_id = $1")
}
