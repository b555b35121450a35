//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod auth;
pub mod docs;
pub mod extract;
pub mod franchises;
pub mod orders;
pub mod users;

pub use auth::{get_me, login, logout, register};
pub use docs::get_docs;
pub use franchises::{
    close_franchise, close_store, create_franchise, create_store, list_franchises,
    list_user_franchises,
};
pub use orders::{get_menu, get_orders, place_order, verify_order};
pub use users::{delete_user, get_user, list_users, update_user};
