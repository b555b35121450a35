//! Auth handlers
//!
//! `/api/auth` (register, login, logout) and `/api/user/me`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::BearerToken;
use crate::domain::entities::{NewUser, RoleAssignment, SanitizedUser};
use crate::error::AppError;
use crate::handlers::extract::ApiJson;
use crate::state::AppState;

/// Request body for registration
///
/// Every field is optional so registration never rejects a body.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub roles: Option<Vec<RoleAssignment>>,
}

/// Request body for login
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// A user plus the token that was just issued for them
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: SanitizedUser,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// POST /api/auth
///
/// Register a new user. Roles default to diner.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let new_user = NewUser::new(
        request.name.as_deref().unwrap_or_default(),
        &request.email,
        &request.password,
        request.roles.unwrap_or_default(),
    );

    let (user, token) = state.auth_service.register(&new_user).await?;

    Ok(Json(AuthResponse { user, token }))
}

/// PUT /api/auth
///
/// Log in with email and password.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (user, token) = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(AuthResponse { user, token }))
}

/// DELETE /api/auth
///
/// Log out. Succeeds with or without a token.
pub async fn logout(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<MessageResponse>, AppError> {
    state.auth_service.logout(token.as_deref()).await?;

    Ok(MessageResponse::new("logout successful"))
}

/// GET /api/user/me
///
/// The calling user, or `null` when nobody can be resolved.
pub async fn get_me(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<Option<SanitizedUser>>, AppError> {
    let user = state
        .auth_service
        .resolve_current_user(token.as_deref())
        .await?;

    Ok(Json(user))
}
