//! # todo-service
//!
//! Business logic for todo items. The service orchestrates the item store
//! and the attachment store on behalf of an authenticated principal.
//!
//! Dependencies are injected at construction time as `Arc` trait objects,
//! so the same service runs over PostgreSQL and S3 in production and over
//! in-memory doubles in tests.

pub mod todo;

pub use todo::{TodoService, TodoSettings};
