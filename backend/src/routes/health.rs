//! Health check endpoints
//!
//! - /health - Liveness: always OK while the process is serving
//! - /health/ready - Readiness: checks the database

use crate::{db, state::AppState};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Seconds since start-up
    pub uptime: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Status of an individual check
#[derive(Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthResponse {
    fn new(status: &str, state: &AppState, checks: Option<HealthChecks>) -> Self {
        Self {
            status: status.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: state.started_at.elapsed().as_secs_f64(),
            checks,
        }
    }
}

/// Basic health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new("OK", &state, None))
}

/// Readiness probe - checks if the service is ready to accept traffic
/// Returns 503 if the database is unreachable
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = match db::health_check(state.db()).await {
        Ok(_) => CheckStatus {
            status: "healthy".to_string(),
            message: None,
        },
        Err(_) => CheckStatus {
            status: "unhealthy".to_string(),
            message: Some("database unreachable".to_string()),
        },
    };

    let is_healthy = db_check.message.is_none();
    let status = if is_healthy { "ready" } else { "not_ready" };
    let response = HealthResponse::new(status, &state, Some(HealthChecks { database: db_check }));

    if is_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
