//! Core traits defined in `todo-core` and implemented by other crates.

pub mod storage;

pub use storage::AttachmentStore;
