//! Menu and order entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserId;

/// A franchise or store id as the storefront sends it
///
/// Store pickers post ids as strings, scripted callers send numbers. The
/// value is echoed back in whichever form it arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityRef {
    Number(u64),
    Text(String),
}

impl From<u64> for EntityRef {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EntityRef {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A pizza on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub title: String,
    pub image: String,
    pub price: f64,
    pub description: String,
}

/// A line on an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id: u64,
    pub description: String,
    pub price: f64,
}

/// A placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub franchise_id: EntityRef,
    pub store_id: EntityRef,
    pub date: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.price).sum()
    }
}

/// Data needed to place an order
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub franchise_id: EntityRef,
    pub store_id: EntityRef,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A diner's order history
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    pub diner_id: Option<UserId>,
    pub orders: Vec<Order>,
    pub page: u32,
}
