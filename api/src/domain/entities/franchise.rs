//! Franchise and store entities
//!
//! The listing is canned. Created franchises and stores are acknowledged
//! but never added to it.

use serde::{Deserialize, Serialize};

use super::user::{SanitizedUser, UserId};

/// A franchise administrator as shown in listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FranchiseAdmin {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl From<&SanitizedUser> for FranchiseAdmin {
    fn from(user: &SanitizedUser) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_revenue: Option<f64>,
}

impl Store {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            total_revenue: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub admins: Vec<FranchiseAdmin>,
    pub stores: Vec<Store>,
}

impl Franchise {
    pub fn is_administered_by(&self, user_id: &UserId) -> bool {
        self.admins.iter().any(|a| &a.id == user_id)
    }
}

/// One page of the franchise listing
#[derive(Debug, Clone, Serialize)]
pub struct FranchiseList {
    pub franchises: Vec<Franchise>,
    pub more: bool,
}
