//! Acquisitions Service Backend
//!
//! ## Architecture
//!
//! - Routes: HTTP request handling and middleware
//! - Auth: bearer token signing and verification
//! - Database: PostgreSQL with SQLx, connected lazily

use acquisitions_backend::{
    config::{self, AppConfig},
    db, routes,
    state::AppState,
};
use anyhow::Result;
use secrecy::ExposeSecret;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config.logging.level);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = %AppConfig::environment(),
        "Starting Acquisitions Service"
    );

    if config.jwt.secret.expose_secret() == config::DEFAULT_JWT_SECRET {
        warn!("JWT_SECRET is unset, using the insecure fallback secret");
    }

    // Validate production configuration
    if AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    let db_pool = db::create_pool(&config.database)?;

    // Create application state
    let state = AppState::new(db_pool, &config)?;

    // Build application
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate and
/// the HTTP middleware.
fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("acquisitions_backend={level},tower_http={level},sqlx=warn").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    let secret = config.jwt.secret.expose_secret();
    if secret == config::DEFAULT_JWT_SECRET || secret.len() < 32 {
        errors.push("JWT secret must be set, at least 32 characters long, and not the default");
    }

    // Check database URL is not localhost in production
    if config.database.url.contains("localhost") || config.database.url.contains("127.0.0.1") {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
