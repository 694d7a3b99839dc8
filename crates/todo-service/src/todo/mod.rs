//! Todo item use cases.

pub mod attachment;
pub mod service;

pub use service::{TodoService, TodoSettings};
