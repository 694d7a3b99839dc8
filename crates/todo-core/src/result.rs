//! Convenience result type alias for the todo backend.

use crate::error::AppError;

/// A specialized `Result` type for todo backend operations.
pub type AppResult<T> = Result<T, AppError>;
