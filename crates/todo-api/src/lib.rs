//! # todo-api
//!
//! HTTP API layer for the todo backend built on Axum.
//!
//! Provides the todo REST endpoints, the token authorizer endpoint, health,
//! middleware (CORS, compression, logging), the `AuthUser` extractor, DTOs,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
