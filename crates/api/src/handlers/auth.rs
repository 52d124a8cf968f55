//! Handler for the `/auth` resource.
//!
//! A single login endpoint comparing the submitted credentials against
//! `ADMIN_USERNAME` / `ADMIN_PASSWORD` from the environment. This is a
//! plaintext compare and deliberately not a hardened auth system; there are
//! no sessions, tokens, or roles behind it.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let config = &state.config;
    if input.username == config.admin_username && input.password == config.admin_password {
        tracing::info!(username = %input.username, "Login succeeded");
        Ok(Json(LoginResponse { success: true }))
    } else {
        tracing::warn!(username = %input.username, "Login failed");
        Err(AppError::Unauthorized("Invalid credentials".into()))
    }
}
