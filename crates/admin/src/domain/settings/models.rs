//! Settings Models

use serde::{Deserialize, Serialize};
use utsav::catalog::shop_info;

/// Storefront identity and toggles the admin can edit; persisted UI-side in
/// the injected key-value store, not in the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteSettings {
    /// Shop display name.
    pub shop_name: String,

    /// One-line tagline.
    pub tagline: String,

    /// Landing-page description.
    pub description: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Pickup/delivery area.
    pub address: String,

    /// FSSAI license number shown in the footer.
    pub fssai_license: String,

    /// Note shown on the order form, e.g. the free-delivery threshold.
    pub delivery_note: String,

    /// Whether the storefront currently accepts orders.
    pub accepting_orders: bool,
}

impl Default for WebsiteSettings {
    fn default() -> Self {
        let shop = shop_info();

        Self {
            shop_name: shop.name,
            tagline: shop.tagline,
            description: shop.description,
            phone: shop.contact.phone,
            email: shop.contact.email,
            address: shop.contact.address,
            fssai_license: shop.contact.fssai_license,
            delivery_note: "Free delivery on orders above ₹500".to_owned(),
            accepting_orders: true,
        }
    }
}
