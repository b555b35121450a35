//! Order service
//!
//! Places orders for the calling diner, lists their history and verifies the
//! order JWTs handed out at checkout.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::adapters::OrderJwtSigner;
use crate::domain::entities::{NewOrder, Order, OrderHistory, SanitizedUser};
use crate::domain::ports::OrderRepository;
use crate::error::AppError;

pub struct OrderService<OR>
where
    OR: OrderRepository,
{
    orders: Arc<OR>,
    signer: OrderJwtSigner,
}

impl<OR> OrderService<OR>
where
    OR: OrderRepository,
{
    pub fn new(orders: Arc<OR>, signer: OrderJwtSigner) -> Self {
        Self { orders, signer }
    }

    /// Place an order for `diner`
    ///
    /// Returns (order, jwt)
    pub async fn place(
        &self,
        diner: &SanitizedUser,
        new_order: &NewOrder,
    ) -> Result<(Order, String), AppError> {
        let order = self.orders.create(&diner.id, new_order).await?;

        let claims = json!({
            "vendor": { "id": "jwt-pizza-mock", "name": "JWT Pizza Mock" },
            "diner": { "id": diner.id, "name": diner.name, "email": diner.email },
            "order": order,
        });
        let jwt = self
            .signer
            .sign(&claims)
            .map_err(|e| AppError::Internal(format!("Failed to sign order: {}", e)))?;

        tracing::debug!(
            user_id = %diner.id,
            order_id = order.id,
            items = order.items.len(),
            total = order.total(),
            "Placed order"
        );

        Ok((order, jwt))
    }

    /// Order history for `diner`; anonymous callers get an empty page
    pub async fn history(&self, diner: Option<&SanitizedUser>) -> Result<OrderHistory, AppError> {
        let orders = match diner {
            Some(diner) => self.orders.list_for_diner(&diner.id).await?,
            None => Vec::new(),
        };

        Ok(OrderHistory {
            diner_id: diner.map(|d| d.id.clone()),
            orders,
            page: 1,
        })
    }

    /// Check an order JWT and return its claims
    pub fn verify(&self, jwt: &str) -> Result<Value, AppError> {
        self.signer
            .verify(jwt)
            .ok_or_else(|| AppError::BadRequest("invalid token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryOrderRepository;
    use crate::domain::entities::OrderItem;
    use crate::test_utils::{test_admin, test_diner};

    fn service() -> OrderService<InMemoryOrderRepository> {
        OrderService::new(
            Arc::new(InMemoryOrderRepository::new()),
            OrderJwtSigner::new("test-secret").unwrap(),
        )
    }

    fn two_pizzas() -> NewOrder {
        NewOrder {
            franchise_id: 2.into(),
            store_id: 4.into(),
            items: vec![
                OrderItem {
                    menu_id: 1,
                    description: "Veggie".to_string(),
                    price: 0.0038,
                },
                OrderItem {
                    menu_id: 2,
                    description: "Pepperoni".to_string(),
                    price: 0.0042,
                },
            ],
        }
    }

    #[tokio::test]
    async fn placed_order_jwt_verifies() {
        let service = service();
        let diner = test_diner();

        let (order, jwt) = service.place(&diner, &two_pizzas()).await.unwrap();
        let claims = service.verify(&jwt).unwrap();

        assert_eq!(claims["order"]["id"], order.id);
        assert_eq!(claims["diner"]["email"], diner.email.as_str());
        assert_eq!(claims["order"]["items"][1]["description"], "Pepperoni");
    }

    #[tokio::test]
    async fn history_only_shows_own_orders() {
        let service = service();
        let diner = test_diner();
        let admin = test_admin();

        service.place(&diner, &two_pizzas()).await.unwrap();
        service.place(&admin, &two_pizzas()).await.unwrap();
        service.place(&diner, &two_pizzas()).await.unwrap();

        let history = service.history(Some(&diner)).await.unwrap();

        assert_eq!(history.diner_id, Some(diner.id));
        assert_eq!(history.orders.len(), 2);
        assert_eq!(history.page, 1);
    }

    #[tokio::test]
    async fn anonymous_history_is_empty() {
        let service = service();
        service.place(&test_diner(), &two_pizzas()).await.unwrap();

        let history = service.history(None).await.unwrap();

        assert!(history.diner_id.is_none());
        assert!(history.orders.is_empty());
    }

    #[test]
    fn verify_rejects_unsigned_token() {
        let result = service().verify("eyJpYXQ");

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.to_string(), "invalid token");
    }
}
