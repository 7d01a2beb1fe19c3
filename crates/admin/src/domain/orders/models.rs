//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use utsav::catalog::ItemId;
use uuid::Uuid;

/// Delivery progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Placed, not yet confirmed by the shop.
    Pending,
    /// Confirmed with the customer.
    Confirmed,
    /// Being prepared.
    Preparing,
    /// On its way.
    OutForDelivery,
    /// Delivered.
    Delivered,
    /// Cancelled.
    Cancelled,
}

impl DeliveryStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Stable key used in wire formats and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a stable key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    Pending,
    /// Paid in full.
    Paid,
    /// Refunded after cancellation.
    Refunded,
}

impl PaymentStatus {
    /// Every status.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Paid, Self::Refunded];

    /// Stable key used in wire formats and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }

    /// Parse a stable key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Catalog item ordered.
    pub item_id: ItemId,

    /// Item name at order time.
    pub name: String,

    /// Units ordered.
    pub quantity: u32,

    /// Unit price in whole rupees at order time.
    pub price: u64,
}

impl OrderLine {
    /// `price × quantity` for this line.
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// A customer order as the admin console sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identity.
    pub id: Uuid,

    /// Customer name.
    pub customer_name: String,

    /// Confirmation phone number.
    pub phone: String,

    /// Delivery address.
    pub address: String,

    /// Ordered lines.
    pub lines: Vec<OrderLine>,

    /// Order total in whole rupees.
    pub total: u64,

    /// Delivery progress.
    pub delivery_status: DeliveryStatus,

    /// Payment state.
    pub payment_status: PaymentStatus,

    /// Free-form admin notes.
    pub notes: Option<String>,

    /// When the order was placed.
    pub created_at: Timestamp,

    /// Last admin update.
    pub updated_at: Timestamp,
}

/// A partial order update; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderUpdate {
    /// New delivery status, if changing.
    pub delivery_status: Option<DeliveryStatus>,

    /// New payment status, if changing.
    pub payment_status: Option<PaymentStatus>,

    /// New admin notes, if changing.
    pub notes: Option<String>,
}
