//! Adapters layer
//!
//! Implementations of port traits, plus the order JWT signer.

pub mod memory;
pub mod order_jwt;
pub mod tokens;

pub use memory::{InMemoryOrderRepository, InMemorySessionRepository, InMemoryUserRepository};
pub use order_jwt::OrderJwtSigner;
pub use tokens::{RandomTokenGenerator, SequentialTokenGenerator};
