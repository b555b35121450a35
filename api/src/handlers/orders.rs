//! Order handlers
//!
//! Menu, checkout, history and JWT verification under `/api/order`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::BearerToken;
use crate::domain::entities::{MenuItem, NewOrder, Order, OrderHistory};
use crate::error::AppError;
use crate::handlers::extract::ApiJson;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PlaceOrderResponse {
    pub order: Order,
    pub jwt: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub jwt: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub message: String,
    pub payload: Value,
}

/// GET /api/order/menu
pub async fn get_menu(State(state): State<AppState>) -> Json<Vec<MenuItem>> {
    Json(state.catalog_service.menu().to_vec())
}

/// POST /api/order
///
/// Place an order for the calling user.
pub async fn place_order(
    State(state): State<AppState>,
    token: BearerToken,
    ApiJson(request): ApiJson<NewOrder>,
) -> Result<Json<PlaceOrderResponse>, AppError> {
    let diner = state
        .auth_service
        .resolve_current_user(token.as_deref())
        .await?
        .ok_or(AppError::Unauthorized)?;

    let (order, jwt) = state.order_service.place(&diner, &request).await?;

    Ok(Json(PlaceOrderResponse { order, jwt }))
}

/// GET /api/order
///
/// The calling user's order history.
pub async fn get_orders(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<Json<OrderHistory>, AppError> {
    let diner = state
        .auth_service
        .resolve_current_user(token.as_deref())
        .await?;

    Ok(Json(state.order_service.history(diner.as_ref()).await?))
}

/// POST /api/order/verify
pub async fn verify_order(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let payload = state.order_service.verify(&request.jwt)?;

    Ok(Json(VerifyResponse {
        message: "valid".to_string(),
        payload,
    }))
}
