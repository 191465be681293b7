//! Reelvault API Server
//!
//! REST API server for the movie-favorites service:
//!
//! - JWT authentication (access + refresh token pairs)
//! - Favorites validated against the external movie catalog before storage
//! - OpenAPI documentation with Swagger UI
//! - Graceful shutdown handling
//!
//! # Usage
//!
//! ```bash
//! # Start with environment configuration
//! DATABASE_URL=postgres://... JWT_SECRET=... CATALOG_API_KEY=... reelvault-server
//!
//! # Start with a config file
//! reelvault-server --config /path/to/config.toml
//!
//! # Environment overrides use a REELVAULT__ prefix
//! REELVAULT__SERVER__PORT=8080 reelvault-server
//! ```

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reelvault_api::{create_router, ApiConfig, AppState};
use reelvault_auth::AuthService;
use reelvault_catalog::{CatalogClient, CatalogConfig, CatalogLookup, FavoriteValidator};
use reelvault_db::{Database, DatabaseConfig as DbConfig, FavoriteStore, UserStore};
use reelvault_favorites::FavoritesService;

use crate::config::ServerConfig;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Reelvault API Server - movie favorites with catalog-validated writes
#[derive(Parser, Debug)]
#[command(name = "reelvault-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, env = "REELVAULT_CONFIG")]
    config: Option<String>,

    /// Host to bind to
    #[arg(long, env = "REELVAULT_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "REELVAULT_PORT")]
    port: Option<u16>,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// JWT secret key
    #[arg(long, env = "JWT_SECRET")]
    jwt_secret: Option<String>,

    /// Catalog base URL
    #[arg(long, env = "CATALOG_BASE_URL")]
    catalog_base_url: Option<String>,

    /// Catalog API key
    #[arg(long, env = "CATALOG_API_KEY")]
    catalog_api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "REELVAULT_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Log format (json, pretty)
    #[arg(long, env = "REELVAULT_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut server_config = ServerConfig::load(args.config.as_deref())?;

    // Override with CLI arguments
    if let Some(host) = args.host {
        server_config.server.host = host;
    }
    if let Some(port) = args.port {
        server_config.server.port = port;
    }
    if let Some(db_url) = args.database_url {
        server_config.database.postgres_url = db_url;
    }
    if let Some(jwt_secret) = args.jwt_secret {
        server_config.auth.jwt_secret = jwt_secret;
    }
    if let Some(base_url) = args.catalog_base_url {
        server_config.catalog.base_url = base_url;
    }
    if let Some(api_key) = args.catalog_api_key {
        server_config.catalog.api_key = api_key;
    }
    server_config.logging.level = args.log_level;
    server_config.logging.format = args.log_format;

    // Initialize logging
    init_logging(&server_config.logging)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Reelvault API Server"
    );

    // Validate configuration; a missing credential never gets past here
    let auth_config = build_auth_config(&server_config.auth);
    if let Err(errors) = auth_config.validate() {
        anyhow::bail!("Invalid auth configuration: {}", errors.join("; "));
    }

    let catalog_config = build_catalog_config(&server_config.catalog);
    catalog_config.validate()?;

    if server_config.database.postgres_url.is_empty() {
        anyhow::bail!("Store URL must be set (DATABASE_URL or [database].postgres_url)");
    }

    // Initialize database
    let db = init_database(&server_config.database).await?;

    // Wire up the services
    let user_store: Arc<dyn UserStore> = Arc::new(db.user_repo());
    let favorite_store: Arc<dyn FavoriteStore> = Arc::new(db.favorite_repo());
    let catalog: Arc<dyn CatalogLookup> = Arc::new(CatalogClient::new(catalog_config)?);

    let auth = Arc::new(AuthService::new(user_store, auth_config)?);
    let favorites = Arc::new(FavoritesService::new(
        FavoriteValidator::new(catalog.clone()),
        favorite_store,
    ));

    tracing::info!("Services initialized");

    // Create application state and router
    let state = Arc::new(AppState::new(auth, favorites, catalog));

    let api_config = ApiConfig {
        enable_cors: server_config.api.enable_cors,
        cors_origins: server_config.api.cors_origins.clone(),
        enable_compression: server_config.api.enable_compression,
        enable_tracing: server_config.api.enable_tracing,
    };

    let app = create_router(state, api_config);

    // Get bind address
    let addr = server_config.server.socket_addr()?;

    tracing::info!(
        host = %server_config.server.host,
        port = %server_config.server.port,
        "Server listening"
    );

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(server_config.server.shutdown_timeout()))
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

// =============================================================================
// Initialization Functions
// =============================================================================

/// Initialize tracing/logging
fn init_logging(config: &config::LoggingConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    match config.format.as_str() {
        "json" => {
            subscriber.with(fmt::layer().json().with_target(true)).init();
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true))
                .init();
        }
    }

    Ok(())
}

/// Build the auth configuration from server settings
fn build_auth_config(settings: &config::AuthSettings) -> reelvault_auth::AuthConfig {
    let mut auth_config = reelvault_auth::AuthConfig::default();
    auth_config.jwt.secret = settings.jwt_secret.clone();
    auth_config.jwt.issuer = settings.jwt_issuer.clone();
    auth_config.jwt.algorithm = settings.jwt_algorithm.clone();
    auth_config.jwt.access_token_lifetime =
        Duration::from_secs(settings.access_token_lifetime_secs);
    auth_config.jwt.refresh_token_lifetime =
        Duration::from_secs(settings.refresh_token_lifetime_secs);
    auth_config
}

/// Build the catalog configuration from server settings
fn build_catalog_config(settings: &config::CatalogSettings) -> CatalogConfig {
    CatalogConfig {
        base_url: settings.base_url.clone(),
        api_key: settings.api_key.clone(),
        timeout_secs: settings.timeout_secs,
    }
}

/// Initialize database connection
async fn init_database(settings: &config::DatabaseSettings) -> anyhow::Result<Database> {
    tracing::info!("Connecting to database...");

    let db_config = DbConfig {
        postgres_url: settings.postgres_url.clone(),
        pg_max_connections: settings.max_connections,
        pg_min_connections: settings.min_connections,
        pg_acquire_timeout_secs: settings.acquire_timeout_secs,
    };

    let db = Database::connect(&db_config).await?;

    if settings.run_migrations {
        db.migrate().await?;
    }

    // Fail fast when the store is unreachable
    db.health_check().await?;

    tracing::info!("Database connected and healthy");

    Ok(db)
}

// =============================================================================
// Graceful Shutdown
// =============================================================================

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // Allow time for in-flight requests to complete
    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "Waiting for in-flight requests to complete..."
    );

    tokio::time::sleep(timeout).await;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["reelvault-server", "--port", "8080"]);
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn test_auth_config_from_settings() {
        let settings = config::AuthSettings {
            jwt_secret: "a".repeat(32),
            ..Default::default()
        };
        let auth_config = build_auth_config(&settings);
        assert!(auth_config.validate().is_ok());
        assert_eq!(
            auth_config.jwt.access_token_lifetime,
            Duration::from_secs(1800)
        );
    }

    #[test]
    fn test_catalog_config_requires_key() {
        let settings = config::CatalogSettings::default();
        let catalog_config = build_catalog_config(&settings);
        assert!(catalog_config.validate().is_err());
    }
}
