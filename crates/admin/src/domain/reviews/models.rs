//! Review Request Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use utsav::catalog::ItemId;
use uuid::Uuid;

/// Moderation state of a submitted review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    /// Awaiting moderation.
    Pending,
    /// Approved and shown on the product page.
    Approved,
    /// Hidden from the storefront.
    Hidden,
}

impl ReviewStatus {
    /// Every status.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Hidden];

    /// Stable key used in wire formats and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Hidden => "hidden",
        }
    }

    /// Parse a stable key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }
}

/// A customer review awaiting (or past) moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    /// Review identity.
    pub id: Uuid,

    /// Reviewed catalog item.
    pub item_id: ItemId,

    /// Reviewer name as submitted.
    pub customer_name: String,

    /// Star rating, 1–5.
    pub rating: u8,

    /// Review text.
    pub comment: String,

    /// Moderation state.
    pub status: ReviewStatus,

    /// When the review was submitted.
    pub created_at: Timestamp,
}
