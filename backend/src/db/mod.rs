//! Database connection management
//!
//! The pool connects lazily: the service starts without a reachable
//! database and the first query opens a connection.

use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Create a lazily connected PostgreSQL pool
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let connect_options =
        PgConnectOptions::from_str(&config.url)?.application_name("acquisitions");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(connect_options);

    info!(max_connections = config.max_connections, "Database pool configured");

    Ok(pool)
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
