//! In-memory adapter for UserRepository

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User, UserId, UserUpdate};
use crate::domain::ports::UserRepository;
use crate::error::DomainError;

/// In-memory implementation of UserRepository
///
/// Users are kept in insertion order so "first match by email" is stable.
/// IDs come from a counter that is never rewound, so a deleted ID is never
/// handed out again.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
    next_id: AtomicU64,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn user_not_found() -> DomainError {
    DomainError::NotFound("user not found".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users.read().await.clone())
    }

    async fn create(&self, new_user: &NewUser) -> Result<User, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id: UserId::from(id),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password: new_user.password.clone(),
            roles: new_user.roles.clone(),
        };

        self.users.write().await.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: &UserId, update: &UserUpdate) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|u| &u.id == id)
            .ok_or_else(user_not_found)?;

        update.apply_to(user);

        Ok(user.clone())
    }

    async fn delete(&self, id: &UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.id != id);
        Ok(users.len() != before)
    }
}
