//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::{
    api::{AdminApiClient, should_fall_back},
    domain::{
        Sourced,
        orders::{
            errors::OrdersServiceError,
            models::{Order, OrderUpdate},
        },
    },
    sample,
};

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// List all orders, newest first.
    async fn list_orders(&self) -> Result<Sourced<Vec<Order>>, OrdersServiceError>;

    /// Apply a partial update to one order.
    async fn update_order(
        &self,
        id: Uuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError>;
}

/// Orders backed by the admin REST API, degrading to the bundled sample
/// view when the backend is unreachable. Writes never degrade: an update
/// that did not happen must surface as an error.
#[derive(Debug, Clone)]
pub struct ApiOrdersService {
    api: AdminApiClient,
}

impl ApiOrdersService {
    pub fn new(api: AdminApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl OrdersService for ApiOrdersService {
    async fn list_orders(&self) -> Result<Sourced<Vec<Order>>, OrdersServiceError> {
        match self.api.get_json("/orders").await {
            Ok(orders) => Ok(Sourced::live(orders)),
            Err(error) if should_fall_back(&error) => {
                warn!("orders backend unavailable, showing sample data: {error}");

                Ok(Sourced::fallback(sample::orders()))
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn update_order(
        &self,
        id: Uuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError> {
        Ok(self.api.put_json(&format!("/orders/{id}"), &update).await?)
    }
}

/// In-memory orders, seeded from the sample set. Backs the bundled server
/// and offline development.
#[derive(Debug)]
pub struct MemOrdersService {
    orders: RwLock<Vec<Order>>,
}

impl MemOrdersService {
    pub fn new() -> Self {
        Self::with_orders(sample::orders())
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(orders),
        }
    }
}

impl Default for MemOrdersService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrdersService for MemOrdersService {
    async fn list_orders(&self) -> Result<Sourced<Vec<Order>>, OrdersServiceError> {
        Ok(Sourced::live(self.orders.read().await.clone()))
    }

    async fn update_order(
        &self,
        id: Uuid,
        update: OrderUpdate,
    ) -> Result<Order, OrdersServiceError> {
        let mut orders = self.orders.write().await;

        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or(OrdersServiceError::NotFound)?;

        if let Some(delivery_status) = update.delivery_status {
            order.delivery_status = delivery_status;
        }

        if let Some(payment_status) = update.payment_status {
            order.payment_status = payment_status;
        }

        if let Some(notes) = update.notes {
            order.notes = Some(notes);
        }

        order.updated_at = Timestamp::now();

        Ok(order.clone())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        api::AdminApiConfig,
        domain::orders::models::{DeliveryStatus, PaymentStatus},
    };

    use super::*;

    fn unreachable_api() -> AdminApiClient {
        // Port 9 (discard) is never listening locally, so every request is
        // a fast connection failure.
        AdminApiClient::new(AdminApiConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            admin_key: "secret".to_owned(),
        })
    }

    #[tokio::test]
    async fn api_list_falls_back_to_sample_data() -> TestResult {
        let service = ApiOrdersService::new(unreachable_api());

        let orders = service.list_orders().await?;

        assert!(orders.is_fallback(), "unreachable backend degrades");
        assert!(!orders.data.is_empty(), "sample set is not empty");

        Ok(())
    }

    #[tokio::test]
    async fn api_update_does_not_fall_back() {
        let service = ApiOrdersService::new(unreachable_api());

        let result = service
            .update_order(Uuid::now_v7(), OrderUpdate::default())
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::Api(_))),
            "writes must error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn mem_update_applies_only_set_fields() -> TestResult {
        let service = MemOrdersService::new();

        let orders = service.list_orders().await?;
        let first = orders.data.first().expect("sample orders exist").clone();

        let updated = service
            .update_order(
                first.id,
                OrderUpdate {
                    delivery_status: Some(DeliveryStatus::Delivered),
                    payment_status: None,
                    notes: Some("left with neighbour".to_owned()),
                },
            )
            .await?;

        assert_eq!(updated.delivery_status, DeliveryStatus::Delivered);
        assert_eq!(updated.payment_status, first.payment_status);
        assert_eq!(updated.notes.as_deref(), Some("left with neighbour"));

        Ok(())
    }

    #[tokio::test]
    async fn mem_update_unknown_order_is_not_found() {
        let service = MemOrdersService::new();

        let result = service
            .update_order(
                Uuid::now_v7(),
                OrderUpdate {
                    payment_status: Some(PaymentStatus::Paid),
                    ..OrderUpdate::default()
                },
            )
            .await;

        assert!(
            matches!(result, Err(OrdersServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
