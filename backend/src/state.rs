//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! Everything here is built once at start-up and read-only afterwards.
//! The pool and token keys are `Arc`-backed, so cloning per request is O(1).

use crate::auth::TokenService;
use crate::config::AppConfig;
use sqlx::PgPool;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    /// Pre-initialized token service with cached keys
    pub tokens: TokenService,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the token keys from the configured secret, so call this
    /// once at start-up. Fails when `jwt.expires_in` cannot be parsed.
    pub fn new(db: PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let tokens = TokenService::from_config(&config.jwt)?;

        Ok(Self {
            db,
            tokens,
            started_at: Instant::now(),
        })
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the token service
    #[inline]
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
