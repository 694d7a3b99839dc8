//! Application builder: wires stores, auth and services into an Axum app
//! and serves it.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use todo_auth::{Authorizer, JwksClient, TokenVerifier};
use todo_core::config::AppConfig;
use todo_core::error::AppError;
use todo_database::PgTodoRepository;
use todo_service::{TodoService, TodoSettings};
use todo_storage::S3AttachmentStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Runs the todo server over an already-migrated database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting todo server...");

    // ── Step 1: Item store ───────────────────────────────────────
    let todo_repo = Arc::new(PgTodoRepository::new(db_pool, &config.todos));

    // ── Step 2: Attachment store ─────────────────────────────────
    let attachments =
        Arc::new(S3AttachmentStore::new(&config.attachments, config.offline).await?);

    // ── Step 3: Token verification ───────────────────────────────
    let http = reqwest::Client::builder()
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;
    let jwks = JwksClient::from_config(&config.auth, http);
    let authorizer = Authorizer::new(TokenVerifier::new(jwks, &config.auth));
    tracing::info!(
        jwks_url = %config.auth.jwks_url,
        cache_ttl_seconds = config.auth.jwks_cache_ttl_seconds,
        "Token verification configured"
    );

    // ── Step 4: Services ─────────────────────────────────────────
    let todo_service = TodoService::new(
        todo_repo,
        attachments,
        TodoSettings::from_config(&config),
    );

    // ── Step 5: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, todo_service, authorizer));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Todo server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Todo server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
