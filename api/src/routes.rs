//! Router assembly

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::handlers;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn unknown_endpoint() -> AppError {
    AppError::NotFound("unknown endpoint".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Build the full router over `state`
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/docs", get(handlers::get_docs))
        // Auth
        .route(
            "/api/auth",
            post(handlers::register)
                .put(handlers::login)
                .delete(handlers::logout),
        )
        // Users
        .route("/api/user", get(handlers::list_users))
        .route("/api/user/me", get(handlers::get_me))
        .route(
            "/api/user/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Franchises (canned listing, acknowledged mutations)
        .route(
            "/api/franchise",
            get(handlers::list_franchises).post(handlers::create_franchise),
        )
        .route(
            "/api/franchise/:id",
            get(handlers::list_user_franchises).delete(handlers::close_franchise),
        )
        .route("/api/franchise/:id/store", post(handlers::create_store))
        .route(
            "/api/franchise/:id/store/:store_id",
            delete(handlers::close_store),
        )
        // Orders
        .route(
            "/api/order",
            get(handlers::get_orders).post(handlers::place_order),
        )
        .route("/api/order/menu", get(handlers::get_menu))
        .route("/api/order/verify", post(handlers::verify_order))
        // Applies to the routes above, so it must come after them
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(unknown_endpoint)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
