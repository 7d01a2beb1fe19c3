//! Read-only product catalog.
//!
//! The catalog is fixed at startup: categories of festival snacks and sweets
//! with prices in whole rupees. Nothing in the cart or greeting subsystems
//! ever mutates it.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod builtin;

pub use builtin::{builtin, shop_info};

/// Stable catalog item identifier (a URL-safe slug such as `poha-chivda`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(slug: &str) -> Self {
        Self::new(slug)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One sellable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable identifier, unique across the whole catalog.
    pub id: ItemId,

    /// Display name.
    pub name: String,

    /// Short description shown on the menu card.
    pub description: String,

    /// Price in whole rupees.
    pub price: u64,

    /// Unit label the price refers to, e.g. `per kg`.
    pub unit: String,

    /// Product photo URLs; the first one is the primary image.
    pub images: SmallVec<[String; 3]>,

    /// Average customer rating, when any reviews exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,

    /// Number of reviews behind [`Self::rating`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_reviews: Option<u32>,
}

/// A themed group of catalog items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Stable category identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description shown above the category grid.
    pub description: String,

    /// Decorative emoji shown next to the name.
    pub icon: String,

    /// The items in this category.
    pub items: Vec<CatalogItem>,
}

/// The full store catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// All categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a single item by id.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.all_items().find(|item| item.id == *id)
    }

    /// Iterate over every item across all categories.
    pub fn all_items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.categories.iter().flat_map(|category| &category.items)
    }

    /// Total number of items on the menu.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.all_items().count()
    }
}

/// Shop contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopContact {
    /// Phone number in display form.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Pickup/delivery area.
    pub address: String,

    /// FSSAI license number shown in the footer.
    pub fssai_license: String,
}

/// Storefront identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopInfo {
    /// Shop display name.
    pub name: String,

    /// One-line tagline.
    pub tagline: String,

    /// Longer description shown on the landing page.
    pub description: String,

    /// Contact details.
    pub contact: ShopContact,
}

/// Format a whole-rupee amount for display, e.g. `₹1,800.00`.
#[must_use]
pub fn format_inr(amount: u64) -> String {
    let major = i64::try_from(amount).unwrap_or(i64::MAX);

    Money::from_major(major, iso::INR).to_string()
}
