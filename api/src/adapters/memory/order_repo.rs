//! In-memory adapter for OrderRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewOrder, Order, UserId};
use crate::domain::ports::OrderRepository;
use crate::error::DomainError;

#[derive(Default)]
struct Orders {
    next_id: u64,
    by_diner: HashMap<UserId, Vec<Order>>,
}

/// In-memory implementation of OrderRepository
#[derive(Default)]
pub struct InMemoryOrderRepository {
    inner: Mutex<Orders>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, diner_id: &UserId, new_order: &NewOrder) -> Result<Order, DomainError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;

        let order = Order {
            id: inner.next_id,
            franchise_id: new_order.franchise_id.clone(),
            store_id: new_order.store_id.clone(),
            date: Utc::now(),
            items: new_order.items.clone(),
        };

        inner
            .by_diner
            .entry(diner_id.clone())
            .or_default()
            .push(order.clone());

        Ok(order)
    }

    async fn list_for_diner(&self, diner_id: &UserId) -> Result<Vec<Order>, DomainError> {
        let inner = self.inner.lock().await;
        Ok(inner.by_diner.get(diner_id).cloned().unwrap_or_default())
    }
}
