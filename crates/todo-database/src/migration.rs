//! Schema bootstrap for the todo table.
//!
//! Table and index names come from configuration, so the statements are
//! built at runtime instead of living in a static migrations directory.

use sqlx::PgPool;
use tracing::info;

use todo_core::config::TodosConfig;
use todo_core::error::{AppError, ErrorKind};

/// Create the todo table and its owner index if they do not exist yet.
pub async fn run_migrations(pool: &PgPool, config: &TodosConfig) -> Result<(), AppError> {
    info!(table = %config.table, index = %config.user_index, "Ensuring todo schema");

    for statement in schema_statements(config) {
        sqlx::query(&statement).execute(pool).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to apply schema for table {}: {e}", config.table),
                e,
            )
        })?;
    }

    info!("Todo schema ready");
    Ok(())
}

fn schema_statements(config: &TodosConfig) -> [String; 2] {
    [
        format!(
            "CREATE TABLE IF NOT EXISTS {table} (\
                todo_id TEXT PRIMARY KEY, \
                user_id TEXT NOT NULL, \
                created_at TIMESTAMPTZ NOT NULL, \
                name TEXT NOT NULL, \
                due_date TEXT, \
                done BOOLEAN NOT NULL DEFAULT FALSE, \
                attachment_url TEXT\
            )",
            table = config.table
        ),
        format!(
            "CREATE INDEX IF NOT EXISTS {index} ON {table} (user_id)",
            index = config.user_index,
            table = config.table
        ),
    ]
}
