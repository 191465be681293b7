//! Authentication handlers
//!
//! Registration and login endpoints over the auth service.

use axum::{extract::State, Json};
use chrono::Utc;
use std::sync::Arc;

use crate::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::error::{ApiError, ApiResult};
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User registration
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Registration successful", body = RegisterResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Email already exists")
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Json<RegisterResponse>> {
    let user = state
        .auth
        .register(&request.name, &request.email, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(RegisterResponse {
        user_id: user.id.to_string(),
        name: user.name,
        email: user.email,
        created_at: user.created_at.timestamp_millis(),
    }))
}

/// User login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let pair = state
        .auth
        .login(&request.email, &request.password)
        .await
        .map_err(ApiError::from)?;

    let expires_in = (pair.access_expires_at - Utc::now().timestamp()).max(0);

    Ok(Json(LoginResponse {
        access_token: pair.access_token,
        refresh_token: pair.refresh_token,
        token_type: pair.token_type,
        expires_in,
    }))
}
