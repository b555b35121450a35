//! Franchise handlers
//!
//! The canned listing plus acknowledgements for franchise and store
//! creation and closure.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::domain::entities::{Franchise, FranchiseAdmin, FranchiseList, Store, UserId};
use crate::error::AppError;
use crate::handlers::auth::MessageResponse;
use crate::handlers::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Query parameters sent by the franchise listing page
///
/// Kept as raw strings; the canned listing ignores them.
#[derive(Debug, Default, Deserialize)]
pub struct ListFranchisesQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
}

/// An admin named by email in a franchise creation request
#[derive(Debug, Default, Deserialize)]
pub struct AdminEmail {
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateFranchiseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub admins: Vec<AdminEmail>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateStoreRequest {
    #[serde(default)]
    pub name: String,
}

/// GET /api/franchise
///
/// Unparseable query strings are ignored along with the parameters.
pub async fn list_franchises(
    State(state): State<AppState>,
    query: Option<Query<ListFranchisesQuery>>,
) -> Json<FranchiseList> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    tracing::trace!(
        page = ?query.page,
        limit = ?query.limit,
        name = ?query.name,
        "Listing franchises"
    );
    Json(state.catalog_service.list_franchises())
}

/// GET /api/franchise/{userId}
///
/// Franchises the given user administers.
pub async fn list_user_franchises(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Json<Vec<Franchise>> {
    Json(state.catalog_service.franchises_for_user(&UserId(user_id)))
}

/// POST /api/franchise
///
/// Admins are looked up by email and must already be registered.
pub async fn create_franchise(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateFranchiseRequest>,
) -> Result<Json<Franchise>, AppError> {
    let mut admins = Vec::with_capacity(request.admins.len());
    for admin in &request.admins {
        let user = state
            .user_service
            .find_by_email(&admin.email)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "unknown user for franchise admin {} provided",
                    admin.email
                ))
            })?;
        admins.push(FranchiseAdmin::from(&user));
    }

    Ok(Json(
        state.catalog_service.create_franchise(&request.name, admins),
    ))
}

/// DELETE /api/franchise/{franchiseId}
pub async fn close_franchise(ApiPath(franchise_id): ApiPath<String>) -> Json<MessageResponse> {
    tracing::debug!(%franchise_id, "Closed franchise");
    MessageResponse::new("franchise deleted")
}

/// POST /api/franchise/{franchiseId}/store
pub async fn create_store(
    State(state): State<AppState>,
    ApiPath(franchise_id): ApiPath<String>,
    ApiJson(request): ApiJson<CreateStoreRequest>,
) -> Json<Store> {
    Json(state.catalog_service.create_store(&franchise_id, &request.name))
}

/// DELETE /api/franchise/{franchiseId}/store/{storeId}
pub async fn close_store(
    ApiPath((franchise_id, store_id)): ApiPath<(String, String)>,
) -> Json<MessageResponse> {
    tracing::debug!(%franchise_id, %store_id, "Closed store");
    MessageResponse::new("store deleted")
}
