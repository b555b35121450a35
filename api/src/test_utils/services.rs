//! Service wiring over fresh in-memory adapters

use std::sync::Arc;

use crate::adapters::{InMemorySessionRepository, InMemoryUserRepository, SequentialTokenGenerator};
use crate::app::{AuthService, UserService};

pub type TestAuthService = AuthService<InMemoryUserRepository, InMemorySessionRepository>;
pub type TestUserService = UserService<InMemoryUserRepository, InMemorySessionRepository>;

/// An empty auth service plus its session store for direct inspection
pub fn auth_service() -> (TestAuthService, Arc<InMemorySessionRepository>) {
    let sessions = Arc::new(InMemorySessionRepository::new());
    let service = AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        sessions.clone(),
        Arc::new(SequentialTokenGenerator::new()),
    );
    (service, sessions)
}

/// A user service sharing its repositories with the returned auth service
pub fn user_service() -> (TestUserService, Arc<TestAuthService>) {
    let users = Arc::new(InMemoryUserRepository::new());
    let auth = Arc::new(AuthService::new(
        users.clone(),
        Arc::new(InMemorySessionRepository::new()),
        Arc::new(SequentialTokenGenerator::new()),
    ));
    (UserService::new(users, auth.clone()), auth)
}
