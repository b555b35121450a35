//! Domain layer
//!
//! Contains the storefront's data model with no HTTP concerns.
//! - `entities`: users, franchises, menu and orders
//! - `ports`: Trait definitions for state storage and token issuing

pub mod entities;
pub mod ports;
