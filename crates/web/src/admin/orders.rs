//! Admin order endpoints.

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utsav_admin::domain::orders::{
    OrdersServiceError,
    models::{DeliveryStatus, Order, OrderLine, OrderUpdate, PaymentStatus},
};
use uuid::Uuid;

use crate::{admin::source_label, extensions::*, state::State};

/// One order line on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// Ordered catalog item id.
    pub item_id: String,

    /// Item name at order time.
    pub name: String,

    /// Units ordered.
    pub quantity: u32,

    /// Unit price in whole rupees.
    pub price: u64,
}

impl From<OrderLine> for OrderLineResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            item_id: line.item_id.to_string(),
            name: line.name,
            quantity: line.quantity,
            price: line.price,
        }
    }
}

/// One order on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// Order UUID.
    pub id: Uuid,

    /// Customer name.
    pub customer_name: String,

    /// Confirmation phone number.
    pub phone: String,

    /// Delivery address.
    pub address: String,

    /// Ordered lines.
    pub lines: Vec<OrderLineResponse>,

    /// Order total in whole rupees.
    pub total: u64,

    /// Delivery status key.
    pub delivery_status: String,

    /// Payment status key.
    pub payment_status: String,

    /// Admin notes.
    pub notes: Option<String>,

    /// When the order was placed (RFC 3339).
    pub created_at: String,

    /// Last admin update (RFC 3339).
    pub updated_at: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer_name: order.customer_name,
            phone: order.phone,
            address: order.address,
            lines: order.lines.into_iter().map(Into::into).collect(),
            total: order.total,
            delivery_status: order.delivery_status.key().to_owned(),
            payment_status: order.payment_status.key().to_owned(),
            notes: order.notes,
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Order list on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// `live` or `fallback`.
    pub source: String,

    /// The orders, newest first.
    pub orders: Vec<OrderResponse>,
}

/// Partial order update request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateOrderRequest {
    /// New delivery status key, if changing.
    pub delivery_status: Option<String>,

    /// New payment status key, if changing.
    pub payment_status: Option<String>,

    /// New admin notes, if changing.
    pub notes: Option<String>,
}

fn parse_update(request: UpdateOrderRequest) -> Result<OrderUpdate, StatusError> {
    let delivery_status = request
        .delivery_status
        .as_deref()
        .map(|key| {
            DeliveryStatus::from_key(key)
                .ok_or_else(|| StatusError::bad_request().brief(format!("unknown delivery status `{key}`")))
        })
        .transpose()?;

    let payment_status = request
        .payment_status
        .as_deref()
        .map(|key| {
            PaymentStatus::from_key(key)
                .ok_or_else(|| StatusError::bad_request().brief(format!("unknown payment status `{key}`")))
        })
        .transpose()?;

    Ok(OrderUpdate {
        delivery_status,
        payment_status,
        notes: request.notes,
    })
}

fn into_status_error(error: &OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::NotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::Api(source) => {
            error!("orders backend error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Order Index Handler
///
/// Returns all orders, tagged with whether they came from the backend or
/// the bundled sample view.
#[endpoint(tags("admin-orders"), summary = "List Orders")]
pub(crate) async fn index_handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let orders = state
        .admin
        .orders
        .list_orders()
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(Json(OrdersResponse {
        source: source_label(orders.source),
        orders: orders.data.into_iter().map(Into::into).collect(),
    }))
}

/// Order Update Handler
///
/// Applies a partial update to one order.
#[endpoint(tags("admin-orders"), summary = "Update Order")]
pub(crate) async fn update_handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateOrderRequest>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let update = parse_update(json.into_inner())?;

    let order = state
        .admin
        .orders
        .update_order(id.into_inner(), update)
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;
    use utsav::catalog::ItemId;
    use utsav_admin::domain::{Sourced, orders::MockOrdersService};

    use crate::test_helpers::{service_with, state_with_orders};

    use super::*;

    fn make_order(id: Uuid) -> Order {
        Order {
            id,
            customer_name: "Priya Sharma".to_owned(),
            phone: "+91 98200 44556".to_owned(),
            address: "Borivali (W), Mumbai".to_owned(),
            lines: vec![OrderLine {
                item_id: ItemId::from("poha-chivda"),
                name: "Poha Chivda".to_owned(),
                quantity: 2,
                price: 600,
            }],
            total: 1200,
            delivery_status: DeliveryStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn routes() -> Router {
        Router::with_path("admin/orders")
            .get(index_handler)
            .push(Router::with_path("{id}").put(update_handler))
    }

    #[tokio::test]
    async fn test_index_reports_the_source() -> TestResult {
        let id = Uuid::now_v7();
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(move || Ok(Sourced::fallback(vec![make_order(id)])));
        orders.expect_update_order().never();

        let response: OrdersResponse = TestClient::get("http://example.com/admin/orders")
            .send(&service_with(state_with_orders(orders), routes()))
            .await
            .take_json()
            .await?;

        assert_eq!(response.source, "fallback");
        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders.first().map(|order| order.id), Some(id));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_parses_status_keys() -> TestResult {
        let id = Uuid::now_v7();
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();
        orders
            .expect_update_order()
            .once()
            .withf(move |order_id, update| {
                *order_id == id
                    && update.delivery_status == Some(DeliveryStatus::Delivered)
                    && update.payment_status.is_none()
            })
            .return_once(move |order_id, update| {
                let mut order = make_order(order_id);

                if let Some(delivery_status) = update.delivery_status {
                    order.delivery_status = delivery_status;
                }

                Ok(order)
            });

        let response: OrderResponse =
            TestClient::put(format!("http://example.com/admin/orders/{id}"))
                .json(&json!({ "delivery_status": "delivered" }))
                .send(&service_with(state_with_orders(orders), routes()))
                .await
                .take_json()
                .await?;

        assert_eq!(response.delivery_status, "delivered");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_with_unknown_status_returns_400() {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();
        orders.expect_update_order().never();

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "delivery_status": "teleported" }))
        .send(&service_with(state_with_orders(orders), routes()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_update_unknown_order_returns_404() {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();
        orders
            .expect_update_order()
            .once()
            .return_once(|_, _| Err(OrdersServiceError::NotFound));

        let res = TestClient::put(format!(
            "http://example.com/admin/orders/{}",
            Uuid::now_v7()
        ))
        .json(&json!({ "payment_status": "paid" }))
        .send(&service_with(state_with_orders(orders), routes()))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
