//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::config::{Config, TokenStrategy};
use crate::domain::entities::{NewUser, Role, RoleAssignment, SanitizedUser, UserId};

/// Default config with deterministic tokens
pub fn test_config() -> Config {
    Config {
        token_strategy: TokenStrategy::Sequential,
        order_signing_secret: "test-secret".to_string(),
        ..Config::default()
    }
}

/// The seeded admin as the backend returns it
pub fn test_admin() -> SanitizedUser {
    SanitizedUser {
        id: UserId::from("1"),
        name: "常用名字".to_string(),
        email: "a@jwt.com".to_string(),
        roles: vec![RoleAssignment::new(Role::Admin)],
    }
}

/// A plain diner
pub fn test_diner() -> SanitizedUser {
    SanitizedUser {
        id: UserId::from("3"),
        name: "Kai Chen".to_string(),
        email: "d@jwt.com".to_string(),
        roles: vec![RoleAssignment::new(Role::Diner)],
    }
}

/// A diner registration (`pizza diner` / `diner`) for the given email
pub fn test_new_user(email: &str) -> NewUser {
    NewUser::new("pizza diner", email, "diner", vec![])
}
