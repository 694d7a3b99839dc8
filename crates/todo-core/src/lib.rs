//! # todo-core
//!
//! Core crate for the todo backend. Contains configuration schemas,
//! the attachment storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other todo crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
