//! Todo Server
//!
//! Main entry point: loads configuration, prepares the database, and
//! hands over to the API crate.

use tracing_subscriber::{EnvFilter, fmt};

use todo_core::config::AppConfig;
use todo_core::error::AppError;
use todo_database::DatabasePool;
use todo_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `config/` files and `TODO__` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TODO_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        offline = config.offline,
        "Starting todo backend"
    );

    // ── Step 1: Database connection + schema ─────────────────────
    let db = DatabasePool::connect(&config.database, config.database_url()).await?;
    run_migrations(db.pool(), &config.todos).await?;

    // ── Step 2: Serve ────────────────────────────────────────────
    todo_api::run_server(config, db.into_pool()).await
}
