//! Auth service
//!
//! Handles registration, login/logout and resolving who is calling.

use std::sync::Arc;

use crate::domain::entities::{NewUser, SanitizedUser, User, UserId};
use crate::domain::ports::{SessionRepository, TokenGenerator, UserRepository};
use crate::error::AppError;

/// Service for sessions and identity
pub struct AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    users: Arc<UR>,
    sessions: Arc<SR>,
    tokens: Arc<dyn TokenGenerator>,
}

impl<UR, SR> AuthService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    pub fn new(users: Arc<UR>, sessions: Arc<SR>, tokens: Arc<dyn TokenGenerator>) -> Self {
        Self {
            users,
            sessions,
            tokens,
        }
    }

    /// Register a new user
    ///
    /// Never fails on duplicate emails. The new user becomes the logged-in
    /// user and gets a fresh token.
    ///
    /// Returns (user, token)
    pub async fn register(&self, new_user: &NewUser) -> Result<(SanitizedUser, String), AppError> {
        let user = self.users.create(new_user).await?;
        let token = self.start_session(&user.id).await?;

        tracing::debug!(user_id = %user.id, "Registered user");

        Ok((user.sanitized(), token))
    }

    /// Log in with email and password
    ///
    /// Only the first user registered with `email` is considered.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(SanitizedUser, String), AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .filter(|u| u.password == password)
            .ok_or(AppError::Unauthorized)?;

        let token = self.start_session(&user.id).await?;

        tracing::debug!(user_id = %user.id, "User logged in");

        Ok((user.sanitized(), token))
    }

    /// Log out
    ///
    /// Revokes `token` when given and always clears the logged-in user.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), AppError> {
        if let Some(token) = token {
            self.sessions.revoke(token).await?;
        }
        self.sessions.set_logged_in(None).await?;

        tracing::debug!(with_token = token.is_some(), "Logged out");

        Ok(())
    }

    /// Resolve the calling user
    ///
    /// A known bearer token wins; otherwise the logged-in user is used. A
    /// token whose user has since been deleted resolves to `None`.
    pub async fn resolve_current_user(
        &self,
        token: Option<&str>,
    ) -> Result<Option<SanitizedUser>, AppError> {
        let bound = match token {
            Some(token) => self.sessions.resolve(token).await?,
            None => None,
        };

        let user_id = match bound {
            Some(id) => Some(id),
            None => self.sessions.logged_in().await?,
        };

        let Some(user_id) = user_id else {
            return Ok(None);
        };

        Ok(self
            .users
            .find_by_id(&user_id)
            .await?
            .as_ref()
            .map(User::sanitized))
    }

    /// Issue a token for `user_id` and mark them logged in
    pub async fn start_session(&self, user_id: &UserId) -> Result<String, AppError> {
        let token = self.tokens.generate(user_id);
        self.sessions.bind(&token, user_id).await?;
        self.sessions.set_logged_in(Some(user_id.clone())).await?;
        Ok(token)
    }
}
