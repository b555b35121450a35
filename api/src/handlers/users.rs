//! User handlers
//!
//! `/api/user` listing and `/api/user/{id}` read, update and delete.

use std::collections::BTreeMap;

use axum::{
    extract::State,
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{SanitizedUser, UserId, UserUpdate};
use crate::error::AppError;
use crate::handlers::auth::{AuthResponse, MessageResponse};
use crate::handlers::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Request body for a profile update; empty strings are ignored
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

/// GET /api/user
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<UserId, SanitizedUser>>, AppError> {
    Ok(Json(state.user_service.list_users().await?))
}

/// GET /api/user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<SanitizedUser>, AppError> {
    Ok(Json(state.user_service.get_user(&UserId(id)).await?))
}

/// PUT /api/user/{id}
///
/// Update a profile. The user is logged in again with a fresh token.
pub async fn update_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let (user, token) = state
        .user_service
        .update_user(&UserId(id), &request.into())
        .await?;

    Ok(Json(AuthResponse { user, token }))
}

/// DELETE /api/user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.delete_user(&UserId(id)).await?;

    Ok(MessageResponse::new("user deleted"))
}
