//! Repository port traits
//!
//! These traits define the interface for the backend's state.
//! Implementations are provided by adapters (in-memory for now).

use async_trait::async_trait;

use crate::domain::entities::{NewOrder, NewUser, Order, User, UserId, UserUpdate};
use crate::error::DomainError;

/// Repository for User records
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// Find the first user (in insertion order) with the given email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// All users, in insertion order
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Create a new user with a freshly allocated ID
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Apply a partial update; `NotFound` when the ID is absent
    async fn update(&self, id: &UserId, update: &UserUpdate) -> Result<User, DomainError>;

    /// Remove a user; returns whether anything was removed
    async fn delete(&self, id: &UserId) -> Result<bool, DomainError>;
}

/// Repository for issued tokens and the logged-in slot
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Bind a token to a user
    async fn bind(&self, token: &str, user_id: &UserId) -> Result<(), DomainError>;

    /// Look up the owner of a token
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, DomainError>;

    /// Forget a token; unknown tokens are ignored
    async fn revoke(&self, token: &str) -> Result<(), DomainError>;

    /// Set or clear the currently logged-in user
    async fn set_logged_in(&self, user_id: Option<UserId>) -> Result<(), DomainError>;

    /// The currently logged-in user, if any
    async fn logged_in(&self) -> Result<Option<UserId>, DomainError>;
}

/// Repository for placed orders
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Store an order for a diner, allocating its ID
    async fn create(&self, diner_id: &UserId, order: &NewOrder) -> Result<Order, DomainError>;

    /// A diner's orders, oldest first
    async fn list_for_diner(&self, diner_id: &UserId) -> Result<Vec<Order>, DomainError>;
}
