//! Claimdesk - API Server Binary
//!
//! This binary starts the HTTP API server for the claim-intake system.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claimdesk-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 DATABASE_URL=postgres://... cargo run --bin claimdesk-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_JWT_SECRET` - JWT signing secret (required in production)
//! * `API_JWT_EXPIRATION_SECS` - JWT token expiration in seconds (default: 3600)
//! * `API_DATABASE_URL` - PostgreSQL connection string
//! * `API_STORAGE` - Storage backend: postgres or memory (default: postgres)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use infra_db::{
    create_pool_from_url, DatabasePool, MemoryClaimRepository, MemoryUserRepository,
    PostgresClaimRepository, PostgresUserRepository, MIGRATOR,
};
use interface_api::config::{ApiConfig, StorageMode};
use interface_api::{create_router, AppState};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, wires the configured storage
/// backend, and starts the HTTP server.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migrations fail
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = load_config();

    // Initialize tracing/logging
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        storage = ?config.storage,
        "Starting Claimdesk API Server"
    );

    // Wire the domain services over the configured storage backend
    let state = match config.storage {
        StorageMode::Postgres => {
            let pool = create_database_pool(&config.database_url)
                .await
                .context("Failed to connect to the database")?;

            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;

            AppState::new(
                Arc::new(PostgresUserRepository::new(pool.clone())),
                Arc::new(PostgresClaimRepository::new(pool)),
                config.clone(),
            )
        }
        StorageMode::Memory => {
            tracing::warn!("Running on in-memory storage; data is lost on shutdown");

            AppState::new(
                Arc::new(MemoryUserRepository::new()),
                Arc::new(MemoryClaimRepository::new()),
                config.clone(),
            )
        }
    };

    // Create the API router
    let app = create_router(state);

    // Parse server address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Invalid server address")?;

    tracing::info!(%addr, "Server listening");

    // Create TCP listener and serve
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables.
///
/// Falls back to default values if environment variables are not set.
fn load_config() -> ApiConfig {
    // Try to load from environment with API_ prefix
    ApiConfig::from_env().unwrap_or_else(|_| {
        // Fall back to individual env vars or defaults
        ApiConfig {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: std::env::var("API_JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
            jwt_expiration_secs: std::env::var("API_JWT_EXPIRATION_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),
            database_url: std::env::var("DATABASE_URL")
                .or_else(|_| std::env::var("API_DATABASE_URL"))
                .unwrap_or_else(|_| "postgres://localhost/claimdesk".to_string()),
            storage: match std::env::var("API_STORAGE") {
                Ok(s) if s.eq_ignore_ascii_case("memory") => StorageMode::Memory,
                _ => StorageMode::Postgres,
            },
            log_level: std::env::var("API_LOG_LEVEL")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),
        }
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Creates a PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns error if connection to database fails
async fn create_database_pool(database_url: &str) -> Result<DatabasePool, infra_db::DatabaseError> {
    tracing::info!("Connecting to database...");

    let pool = create_pool_from_url(database_url).await?;

    tracing::info!("Database connection established");
    Ok(pool)
}

/// Applies the embedded schema migrations.
///
/// # Arguments
///
/// * `pool` - Database connection pool
///
/// # Errors
///
/// Returns error if migrations fail to apply
async fn run_migrations(pool: &DatabasePool) -> Result<(), infra_db::DatabaseError> {
    tracing::info!("Running database migrations...");

    MIGRATOR.run(pool).await?;

    tracing::info!("Database ready");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
