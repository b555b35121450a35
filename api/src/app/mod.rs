//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod auth_service;
pub mod catalog_service;
pub mod order_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use user_service::UserService;
