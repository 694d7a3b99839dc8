//! # todo-database
//!
//! PostgreSQL connection management, schema bootstrap, and the
//! [`TodoStore`] implementations: [`PgTodoRepository`] for PostgreSQL and
//! [`MemoryTodoRepository`] as the test double for service and API tests.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryTodoRepository, PgTodoRepository, TodoStore};
