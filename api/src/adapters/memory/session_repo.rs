//! In-memory adapter for SessionRepository

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::UserId;
use crate::domain::ports::SessionRepository;
use crate::error::DomainError;

/// In-memory implementation of SessionRepository
#[derive(Default)]
pub struct InMemorySessionRepository {
    tokens: RwLock<HashMap<String, UserId>>,
    logged_in: RwLock<Option<UserId>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn bind(&self, token: &str, user_id: &UserId) -> Result<(), DomainError> {
        self.tokens
            .write()
            .await
            .insert(token.to_string(), user_id.clone());
        Ok(())
    }

    async fn resolve(&self, token: &str) -> Result<Option<UserId>, DomainError> {
        Ok(self.tokens.read().await.get(token).cloned())
    }

    async fn revoke(&self, token: &str) -> Result<(), DomainError> {
        self.tokens.write().await.remove(token);
        Ok(())
    }

    async fn set_logged_in(&self, user_id: Option<UserId>) -> Result<(), DomainError> {
        *self.logged_in.write().await = user_id;
        Ok(())
    }

    async fn logged_in(&self) -> Result<Option<UserId>, DomainError> {
        Ok(self.logged_in.read().await.clone())
    }
}
