//! User service
//!
//! Admin-style listing plus profile updates and deletion.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::app::AuthService;
use crate::domain::entities::{SanitizedUser, UserId, UserUpdate};
use crate::domain::ports::{SessionRepository, UserRepository};
use crate::error::AppError;

/// Service for managing user records
pub struct UserService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    users: Arc<UR>,
    auth: Arc<AuthService<UR, SR>>,
}

impl<UR, SR> UserService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    pub fn new(users: Arc<UR>, auth: Arc<AuthService<UR, SR>>) -> Self {
        Self { users, auth }
    }

    /// Every user, keyed by ID
    pub async fn list_users(&self) -> Result<BTreeMap<UserId, SanitizedUser>, AppError> {
        Ok(self
            .users
            .list()
            .await?
            .iter()
            .map(|u| (u.id.clone(), u.sanitized()))
            .collect())
    }

    pub async fn get_user(&self, id: &UserId) -> Result<SanitizedUser, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .map(|u| u.sanitized())
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    /// The first user registered with `email`
    pub async fn find_by_email(&self, email: &str) -> Result<Option<SanitizedUser>, AppError> {
        Ok(self
            .users
            .find_by_email(email)
            .await?
            .map(|u| u.sanitized()))
    }

    /// Update a user's profile
    ///
    /// The updated user is logged in with a fresh token.
    ///
    /// Returns (user, token)
    pub async fn update_user(
        &self,
        id: &UserId,
        update: &UserUpdate,
    ) -> Result<(SanitizedUser, String), AppError> {
        let user = self.users.update(id, update).await?;
        let token = self.auth.start_session(&user.id).await?;

        tracing::debug!(user_id = %user.id, "Updated user");

        Ok((user.sanitized(), token))
    }

    /// Delete a user; unknown IDs are not an error
    pub async fn delete_user(&self, id: &UserId) -> Result<(), AppError> {
        let removed = self.users.delete(id).await?;

        tracing::debug!(user_id = %id, removed, "Deleted user");

        Ok(())
    }
}
