//! User domain entity
//!
//! A storefront account. Passwords live on [`User`] only; everything that
//! leaves the process goes through [`SanitizedUser`].

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
///
/// Ids are decimal strings allocated from a counter ("1", "2", ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl From<u64> for UserId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storefront role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Diner,
    Franchisee,
}

/// A role held by a user, optionally scoped to an object (a franchise id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl RoleAssignment {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            object_id: None,
        }
    }
}

/// A stored user record, password included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<RoleAssignment>,
}

impl User {
    /// Strip the password for anything that crosses the HTTP boundary
    pub fn sanitized(&self) -> SanitizedUser {
        SanitizedUser {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// The only user shape ever returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub roles: Vec<RoleAssignment>,
}

/// Data needed to create a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<RoleAssignment>,
}

impl NewUser {
    /// Build a registration, defaulting to a single diner role
    pub fn new(name: &str, email: &str, password: &str, roles: Vec<RoleAssignment>) -> Self {
        let roles = if roles.is_empty() {
            vec![RoleAssignment::new(Role::Diner)]
        } else {
            roles
        };
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            roles,
        }
    }
}

/// Partial profile update; empty strings count as "not supplied"
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UserUpdate {
    /// Overwrite the supplied, non-empty fields of `user`
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = non_empty(&self.name) {
            user.name = name.to_string();
        }
        if let Some(email) = non_empty(&self.email) {
            user.email = email.to_string();
        }
        if let Some(password) = non_empty(&self.password) {
            user.password = password.to_string();
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
