//! Contact Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person the shop reaches out to with offers and greetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact identity.
    pub id: Uuid,

    /// Name.
    pub name: String,

    /// Phone number.
    pub phone: String,

    /// Email, when known.
    pub email: Option<String>,

    /// Relationship bucket (friend, family, colleague, customer, …).
    pub relationship: String,

    /// Free-form notes.
    pub notes: Option<String>,

    /// When the contact was added.
    pub created_at: Timestamp,
}

/// Data for a new contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    /// Name.
    pub name: String,

    /// Phone number.
    pub phone: String,

    /// Email, when known.
    pub email: Option<String>,

    /// Relationship bucket.
    pub relationship: String,

    /// Free-form notes.
    pub notes: Option<String>,
}
