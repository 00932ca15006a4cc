//! Authentication routes
//!
//! Mounted under `/api/auth`. The handlers are placeholders that answer
//! with a fixed message until credential handling lands.

use crate::state::AppState;
use axum::{routing::post, Router};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
}

/// POST /api/auth/sign-up
async fn sign_up() -> &'static str {
    "POST /api/auth/sign-up response"
}

/// POST /api/auth/sign-in
async fn sign_in() -> &'static str {
    "POST /api/auth/sign-in response"
}

/// POST /api/auth/sign-out
async fn sign_out() -> &'static str {
    "POST /api/auth/sign-out response"
}
